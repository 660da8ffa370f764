use dioxus::prelude::*;

/// Bordered panel. `title`, `description` and `eyebrow` render a header
/// above the body when any of them is set.
#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    /// Small caps line above the title, e.g. the product name on auth pages.
    #[props(default)]
    eyebrow: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = title.is_some() || description.is_some() || eyebrow.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if has_header {
                header { class: "card-header",
                    if let Some(eyebrow) = eyebrow {
                        span { class: "card-eyebrow", "{eyebrow}" }
                    }
                    if let Some(title) = title {
                        h3 { class: "card-title", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// Right-aligned action row at the bottom of a [`Card`].
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        footer { class: "card-footer", {children} }
    }
}

/// Compact card showing one headline number on a dashboard.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "card stat-card",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-hint", "{hint}" }
            }
        }
    }
}
