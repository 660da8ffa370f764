use dioxus::prelude::*;

/// Title block for a screen. Children render as the action area on the
/// right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if let Some(description) = description {
                    p { class: "page-description", "{description}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
