mod header;
mod narrow;
mod sidebar_nav;

use dioxus::prelude::*;
use shared_types::{select_layout_variant, shell_plan, Narrow, View};
use shared_ui::{SidebarInset, SidebarProvider};

use crate::screens::ViewOutlet;
use crate::session::{use_session, use_viewport};
use crate::viewport::ViewportListener;

use header::ShellHeader;
use narrow::{DesktopRequired, MobileTabs};
use sidebar_nav::SidebarNav;

/// Width assumed before the first resize report arrives.
const ASSUMED_WIDTH: u32 = 1280;

/// Chrome around every signed-in view: header and collapsible sidebar, plus
/// the narrow-viewport tree for the role (bottom tabs or a desktop-required
/// notice). The stylesheet shows one tree or the other at 768px.
#[component]
pub fn AppShell(view: View) -> Element {
    let mut session = use_session();
    let viewport = use_viewport();

    let role = session.role();
    let collapsed = session.sidebar_collapsed();
    let plan = shell_plan(role);
    let width = (viewport.width)().unwrap_or(ASSUMED_WIDTH);
    let variant = select_layout_variant(role, width);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        ViewportListener {}

        div {
            class: "app-shell",
            "data-layout": variant.as_str(),
            "data-role": role.as_str(),
            "data-narrow": plan.narrow.as_str(),

            SidebarProvider { collapsed,
                SidebarNav { role, collapsed, view: view.clone() }

                SidebarInset {
                    ShellHeader {
                        title: view.title().to_string(),
                        on_toggle_sidebar: move |_| session.toggle_sidebar(),
                    }

                    div { class: "page-content",
                        ViewOutlet { view: view.clone() }
                    }

                    if plan.narrow == Narrow::MobileShell {
                        MobileTabs { role, view: view.clone() }
                    }
                }
            }

            if plan.narrow == Narrow::DesktopRequired {
                DesktopRequired { role }
            }
        }
    }
}
