use dioxus::prelude::*;

/// Colour of a badge. Record statuses map onto these one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Accent,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Accent => "accent",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
        }
    }
}

/// Inline pill for statuses and role names.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    /// Leading status dot.
    #[props(default = false)]
    dot: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-tone": tone.as_str(),
            if dot {
                span { class: "badge-dot", "aria-hidden": "true" }
            }
            {children}
        }
    }
}
