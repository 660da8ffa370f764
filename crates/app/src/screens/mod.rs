pub mod dashboard;
pub mod login;
pub mod onboarding;
pub mod placeholder;
pub mod profile;
pub mod records;
pub mod settings;

use dioxus::prelude::*;
use shared_types::{Screen, View};

use dashboard::Dashboard;
use login::Login;
use placeholder::FeaturePlaceholder;
use profile::ProfilePage;
use records::RecordsPage;
use settings::SettingsPage;

/// Mounts the component for a resolved view. Never sees a raw request:
/// the router has already masked anything the role may not open.
#[component]
pub fn ViewOutlet(view: View) -> Element {
    match view {
        View::Login => rsx! { Login {} },
        View::Public { screen } => rsx! { onboarding::PublicScreen { screen } },
        View::Dashboard(dashboard) => rsx! { Dashboard { view: dashboard } },
        View::Screen { screen } => rsx! { DedicatedScreen { key: "{screen.key()}", screen } },
        View::Placeholder { feature, role } => rsx! { FeaturePlaceholder { feature, role } },
    }
}

/// The dedicated component for a screen a role is entitled to.
#[component]
fn DedicatedScreen(screen: Screen) -> Element {
    match screen {
        Screen::Settings => rsx! { SettingsPage {} },
        Screen::Profile => rsx! { ProfilePage {} },
        _ => rsx! { RecordsPage { screen } },
    }
}
