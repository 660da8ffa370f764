use dioxus::prelude::*;
use shared_types::{menu, AppConfig, Role, View};
use shared_ui::{BottomNav, BottomNavItem, Button, ButtonVariant};

use crate::icons::MenuGlyph;
use crate::session::use_session;

/// Bottom tab bar for roles with a phone layout.
#[component]
pub fn MobileTabs(role: Role, view: View) -> Element {
    let mut session = use_session();
    let tabs = menu::bottom_tabs(role);

    rsx! {
        div { class: "mobile-only",
            BottomNav {
                for tab in tabs.iter() {
                    BottomNavItem {
                        label: tab.label.to_string(),
                        active: tab.is_active(&view),
                        onclick: move |_| session.navigate(tab.screen),
                        MenuGlyph { icon: tab.icon, size: 20 }
                    }
                }
            }
        }
    }
}

/// Shown instead of the app on narrow screens for roles without a phone
/// layout.
#[component]
pub fn DesktopRequired(role: Role) -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();

    rsx! {
        div { class: "desktop-required",
            div { class: "desktop-required-card",
                h2 { "Desktop required" }
                p {
                    "The {role.display_name()} workspace needs a screen at least 768px wide. "
                    "Open {config.shell.app_name} on a laptop or desktop."
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| session.logout(),
                    "Sign out"
                }
            }
        }
    }
}
