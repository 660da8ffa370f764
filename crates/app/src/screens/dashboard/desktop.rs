use dioxus::prelude::*;
use shared_types::catalog::{dashboard_stats, records_for};
use shared_types::DashboardKind;
use shared_ui::{Badge, Button, ButtonSize, ButtonVariant, Card, PageHeader, StatCard};

use super::{focus_screen, quick_actions};
use crate::screens::records::status_tone;
use crate::session::use_session;

#[component]
pub fn DesktopDashboard(kind: DashboardKind) -> Element {
    let mut session = use_session();
    let user = session.user();
    let role = session.role();

    let stats = dashboard_stats(kind);
    let focus = focus_screen(kind);
    let attention: Vec<_> = records_for(focus).into_iter().take(3).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-desktop", "data-kind": kind.as_str(),
            PageHeader {
                title: format!("Welcome back, {}", user.display_name()),
                description: format!("{} overview", role.display_name()),
            }

            div { class: "dashboard-stats",
                for tile in stats {
                    StatCard {
                        label: tile.label.to_string(),
                        value: tile.value.to_string(),
                        hint: tile.hint.to_string(),
                    }
                }
            }

            div { class: "dashboard-columns",
                Card { title: "Quick actions",
                    div { class: "dashboard-actions",
                        for (screen, label) in quick_actions(kind).iter().copied() {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| session.navigate(screen),
                                "{label}"
                            }
                        }
                    }
                }

                Card { title: "Needs attention",
                    ul { class: "dashboard-list",
                        for record in attention {
                            li { key: "{record.id}",
                                div {
                                    span { class: "dashboard-list-title", "{record.title}" }
                                    span { class: "dashboard-list-detail", "{record.detail}" }
                                }
                                Badge { tone: status_tone(record.status), "{record.status.label()}" }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| session.navigate(focus),
                        "Open {focus.title()}"
                    }
                }
            }
        }
    }
}
