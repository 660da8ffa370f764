use dioxus::prelude::*;

/// Labelled single-line field. `on_input` receives the new text on every
/// keystroke.
#[component]
pub fn TextField(
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    /// HTML input type: `text`, `email`, `tel`...
    #[props(default = "text".to_string())]
    kind: String,
) -> Element {
    let id = field_id(&label);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "text-field",
            label { class: "text-field-label", r#for: "{id}", "{label}" }
            input {
                class: "text-field-input",
                id: "{id}",
                r#type: "{kind}",
                value,
                placeholder,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// DOM id derived from a label: `"Email address"` becomes `field-email-address`.
fn field_id(label: &str) -> String {
    let slug: Vec<String> = label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    format!("field-{}", slug.join("-"))
}
