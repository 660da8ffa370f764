use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, Screen};
use shared_ui::{Button, ButtonVariant, SidebarTrigger, TopBar, TopBarActions, TopBarTitle, UserChip};

use crate::session::use_session;

/// Top bar: sidebar trigger, page title, user chip and sign-out.
#[component]
pub fn ShellHeader(title: String, on_toggle_sidebar: EventHandler<()>) -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();

    let user = session.user();
    let role = session.role();
    let subtitle = user
        .institution
        .clone()
        .or_else(|| config.shell.institution.clone())
        .map(|inst| format!("{} · {inst}", role.display_name()))
        .unwrap_or_else(|| role.display_name().to_string());

    rsx! {
        TopBar {
            SidebarTrigger {
                class: "desktop-only",
                on_toggle: move |_| on_toggle_sidebar.call(()),
                Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
            }
            span { class: "top-bar-brand mobile-only", "{config.shell.app_name}" }
            TopBarTitle { "{title}" }
            TopBarActions {
                button {
                    class: "top-bar-user",
                    r#type: "button",
                    onclick: move |_| session.navigate(Screen::Profile),
                    UserChip {
                        initials: user.initials(),
                        name: user.display_name().to_string(),
                        subtitle,
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Sign out",
                    onclick: move |_| {
                        tracing::info!("signing out");
                        session.logout();
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    span { class: "desktop-only", "Sign out" }
                }
            }
        }
    }
}
