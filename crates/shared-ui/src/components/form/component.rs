use dioxus::prelude::*;

/// Form that never reloads the page. `on_submit` fires on Enter or a
/// submit button.
#[component]
pub fn Form(
    #[props(default)] on_submit: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            ..merged,
            {children}
        }
    }
}

/// Two fields side by side; stacks on narrow screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}
