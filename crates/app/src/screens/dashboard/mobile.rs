use dioxus::prelude::*;
use shared_types::catalog::{dashboard_stats, records_for};
use shared_types::DashboardKind;

use super::{focus_screen, quick_actions};
use crate::session::use_session;

/// Phone dashboard: greeting, a swipeable stat strip and large tap targets.
#[component]
pub fn MobileDashboard(kind: DashboardKind) -> Element {
    let mut session = use_session();
    let user = session.user();

    let stats = dashboard_stats(kind);
    let focus = focus_screen(kind);
    let next_up = records_for(focus).into_iter().next();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-mobile", "data-kind": kind.as_str(),
            div { class: "mobile-greeting",
                span { class: "mobile-greeting-hello", "Hi, {user.display_name()}" }
                if let Some(inst) = user.institution.as_ref() {
                    span { class: "mobile-greeting-school", "{inst}" }
                }
            }

            div { class: "mobile-stat-strip",
                for tile in stats {
                    div { class: "mobile-stat",
                        span { class: "mobile-stat-value", "{tile.value}" }
                        span { class: "mobile-stat-label", "{tile.label}" }
                    }
                }
            }

            if let Some(record) = next_up {
                button {
                    class: "mobile-next-up",
                    r#type: "button",
                    onclick: move |_| session.navigate(focus),
                    span { class: "mobile-next-up-label", "Up next" }
                    span { class: "mobile-next-up-title", "{record.title}" }
                    span { class: "mobile-next-up-detail", "{record.detail}" }
                }
            }

            div { class: "mobile-tiles",
                for (screen, label) in quick_actions(kind).iter().copied() {
                    button {
                        class: "mobile-tile",
                        r#type: "button",
                        onclick: move |_| session.navigate(screen),
                        "{label}"
                    }
                }
            }
        }
    }
}
