use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::theme::{ThemeSeed, ThemeState};

mod icons;
mod role_gate;
mod screens;
mod session;
mod shell;
mod viewport;

#[cfg(test)]
mod test_support;

use screens::ViewOutlet;
use session::{use_session, SessionState, ViewportState};
use shell::AppShell;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_CLASSIC: Asset = asset!("/assets/themes/classic.css");
const THEME_MIDNIGHT: Asset = asset!("/assets/themes/midnight.css");
const THEME_MEADOW: Asset = asset!("/assets/themes/meadow.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| AppConfig::from_toml_or_default(CONFIG_TOML));
    use_hook(|| tracing::info!(platform = client_platform(), app = %config.shell.app_name, "starting"));

    use_context_provider(SessionState::new);
    use_context_provider(ViewportState::new);

    let default_theme = config.shell.default_theme.clone();
    use_context_provider(move || ThemeState {
        family: Signal::new(default_theme),
        is_dark: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_CLASSIC }
        document::Link { rel: "stylesheet", href: THEME_MIDNIGHT }
        document::Link { rel: "stylesheet", href: THEME_MEADOW }
        ThemeSeed { fallback: config.shell.default_theme.clone() }
        shared_ui::ToastProvider {
            Root {}
        }
    }
}

/// Picks between the signed-out screens and the authenticated shell.
///
/// The shell, and with it the resize listener, only exists while a session
/// is signed in.
#[component]
fn Root() -> Element {
    let session = use_session();
    let view = session.view();

    if session.is_authenticated() {
        rsx! { AppShell { view } }
    } else {
        rsx! { ViewOutlet { view } }
    }
}
