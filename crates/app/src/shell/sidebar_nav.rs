use dioxus::prelude::*;
use shared_types::{menu, AppConfig, Role, View};
use shared_ui::theme::ThemeState;
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader, SidebarMenuButton,
    Switch, SwitchThumb,
};

use crate::icons::MenuGlyph;
use crate::session::use_session;

/// Desktop sidebar built from the role's menu sections.
#[component]
pub fn SidebarNav(role: Role, collapsed: bool, view: View) -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();
    let mut theme_state: ThemeState = use_context();

    let sections = menu::sidebar_sections(role);
    let show_mode_toggle = {
        let family = theme_state.family();
        family.has_dark() && family.has_light()
    };

    rsx! {
        Sidebar { collapsed,
            SidebarHeader {
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-mark", "C" }
                    span { class: "sidebar-brand-text", "{config.shell.app_name}" }
                }
            }

            SidebarContent {
                for section in sections.iter() {
                    SidebarGroup { label: section.label.to_string(),
                        for entry in section.items.iter() {
                            SidebarMenuButton {
                                active: entry.is_active(&view),
                                label: entry.label.to_string(),
                                onclick: move |_| session.navigate(entry.screen),
                                MenuGlyph { icon: entry.icon }
                            }
                        }
                    }
                }
            }

            SidebarFooter {
                if show_mode_toggle && !collapsed {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark mode" }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }
            }
        }
    }
}
