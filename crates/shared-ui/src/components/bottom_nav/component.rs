use dioxus::prelude::*;

/// Fixed tab bar along the bottom edge of the mobile shell.
#[component]
pub fn BottomNav(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "bottom-nav", "aria-label": "Primary", {children} }
    }
}

/// One tab: icon above a short label.
#[component]
pub fn BottomNavItem(
    label: String,
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "bottom-nav-item",
            r#type: "button",
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            span { class: "bottom-nav-icon", {children} }
            span { class: "bottom-nav-label", "{label}" }
        }
    }
}
