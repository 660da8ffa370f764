use dioxus::prelude::*;
use shared_types::{Role, Screen};
use shared_ui::{Button, Card};

use crate::session::use_session;

/// Stand-in for a feature the signed-in role cannot open.
#[component]
pub fn FeaturePlaceholder(feature: Screen, role: Role) -> Element {
    let mut session = use_session();

    rsx! {
        div { class: "feature-placeholder", "data-feature": feature.key(),
            Card {
                title: feature.title().to_string(),
                description: format!(
                    "{} is not available for {} accounts.",
                    feature.title(),
                    role.display_name()
                ),
                p { class: "feature-placeholder-hint",
                    "Ask your institution admin if you think you should have access."
                }
                Button {
                    onclick: move |_| session.navigate(Screen::Dashboard),
                    "Back to dashboard"
                }
            }
        }
    }
}
