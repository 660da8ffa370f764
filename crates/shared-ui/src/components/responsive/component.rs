use dioxus::prelude::*;

/// Renders both subtrees; the stylesheet hides whichever does not fit the
/// viewport (breakpoint 768px).
#[component]
pub fn Responsive(desktop: Element, mobile: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "only-desktop", "data-variant": "desktop", {desktop} }
        div { class: "only-mobile", "data-variant": "mobile", {mobile} }
    }
}
