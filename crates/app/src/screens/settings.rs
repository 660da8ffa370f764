use dioxus::prelude::*;
use shared_types::{AppConfig, Role};
use shared_ui::theme::{ThemeState, ALL_FAMILIES};
use shared_ui::{use_toast, Button, Card, PageHeader, SwitchField, ToastOptions};

use crate::role_gate::RoleGate;
use crate::session::use_session;

/// Settings page: appearance, layout and notification preferences.
#[component]
pub fn SettingsPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }
        div { class: "settings-page",
            PageHeader {
                title: "Settings",
                description: "Preferences apply to this browser tab until you sign out.",
            }
            AppearanceSection {}
            LayoutSection {}
            NotificationsSection {}
            RoleGate {
                roles: vec![Role::SuperAdmin, Role::InstitutionAdmin],
                fallback: rsx! {},
                InstitutionSection {}
            }
        }
    }
}

#[component]
fn AppearanceSection() -> Element {
    let mut theme_state: ThemeState = use_context();

    let current = theme_state.family();
    let show_mode_toggle = current.has_dark() && current.has_light();

    rsx! {
        Card {
            title: "Appearance",
            description: "Colour scheme for the whole app.",
            div { class: "settings-theme-grid",
                for family in ALL_FAMILIES.iter().copied() {
                    button {
                        class: "settings-theme-option",
                        r#type: "button",
                        "data-active": if family == current { "true" } else { "false" },
                        onclick: move |_| {
                            theme_state.family.set(family.as_str().to_string());
                            theme_state.apply();
                        },
                        span { class: "settings-theme-swatch", "data-theme-preview": family.as_str() }
                        "{family.display_name()}"
                    }
                }
            }
            if show_mode_toggle {
                SwitchField {
                    label: "Dark mode",
                    checked: (theme_state.is_dark)(),
                    on_change: move |val: bool| {
                        theme_state.is_dark.set(val);
                        theme_state.apply();
                    },
                }
            }
        }
    }
}

#[component]
fn LayoutSection() -> Element {
    let mut session = use_session();
    let collapsed = session.sidebar_collapsed();

    rsx! {
        Card { title: "Layout",
            SwitchField {
                label: "Compact sidebar",
                description: "Show icons only. Small screens switch this on automatically.",
                checked: collapsed,
                on_change: move |val: bool| {
                    if val != session.sidebar_collapsed() {
                        session.toggle_sidebar();
                    }
                },
            }
        }
    }
}

#[component]
fn NotificationsSection() -> Element {
    let toast = use_toast();
    let mut email_digest = use_signal(|| true);
    let mut push_alerts = use_signal(|| false);

    rsx! {
        Card { title: "Notifications",
            SwitchField {
                label: "Daily email digest",
                checked: email_digest(),
                on_change: move |val: bool| email_digest.set(val),
            }
            SwitchField {
                label: "Push alerts",
                description: "Attendance, fee and grade updates as they happen.",
                checked: push_alerts(),
                on_change: move |val: bool| push_alerts.set(val),
            }
            Button {
                onclick: move |_| {
                    toast.success("Notification preferences saved".to_string(), ToastOptions::new());
                },
                "Save preferences"
            }
        }
    }
}

/// Read-only deployment details, visible to administrators.
#[component]
fn InstitutionSection() -> Element {
    let config: AppConfig = use_context();
    let institution = config
        .shell
        .institution
        .clone()
        .unwrap_or_else(|| "Not configured".to_string());

    rsx! {
        Card { title: "Institution",
            dl { class: "settings-facts",
                dt { "Product" }
                dd { "{config.shell.app_name}" }
                dt { "Institution" }
                dd { "{institution}" }
                dt { "Default theme" }
                dd { "{config.shell.default_theme}" }
            }
        }
    }
}
