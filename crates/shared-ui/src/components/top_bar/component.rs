use dioxus::prelude::*;

/// Header strip across the top of the content area.
#[component]
pub fn TopBar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "top-bar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TopBarTitle(children: Element) -> Element {
    rsx! {
        div { class: "top-bar-title", {children} }
    }
}

/// Pushes its children to the right edge.
#[component]
pub fn TopBarActions(children: Element) -> Element {
    rsx! {
        div { class: "top-bar-actions", {children} }
    }
}

/// Round badge with the signed-in user's initials.
#[component]
pub fn UserChip(initials: String, name: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "user-chip",
            span { class: "user-chip-avatar", "{initials}" }
            span { class: "user-chip-text",
                span { class: "user-chip-name", "{name}" }
                if !subtitle.is_empty() {
                    span { class: "user-chip-subtitle", "{subtitle}" }
                }
            }
        }
    }
}
