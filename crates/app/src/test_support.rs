//! Server-side rendering harness for component tests.

use dioxus::prelude::*;
use shared_types::{AppConfig, Role, Screen, Session};
use shared_ui::theme::ThemeState;

use crate::screens::login::demo_user;
use crate::session::{SessionState, ViewportState};

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    session: Session,
    width: Option<u32>,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    use_context_provider(AppConfig::default);
    let session = props.session.clone();
    use_context_provider(move || SessionState::from_session(session));
    let width = props.width;
    use_context_provider(move || ViewportState::with_width(width));
    use_context_provider(|| ThemeState {
        family: Signal::new("classic".to_string()),
        is_dark: Signal::new(false),
    });

    rsx! {
        shared_ui::ToastProvider {
            crate::Root {}
        }
    }
}

/// Render the whole app for `session` to an HTML string.
pub fn render(session: Session, width: Option<u32>) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { session, width });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the app signed in as `role`'s sample user and sitting on `screen`.
pub fn render_signed_in(role: Role, screen: Screen, width: Option<u32>) -> String {
    let mut session = Session::new();
    session.login(role, demo_user(role, Some("Greenwood International School")));
    session.navigate(screen);
    render(session, width)
}
