use dioxus::prelude::*;
use shared_ui::{use_toast, Badge, BadgeTone, Button, Card, Form, PageHeader, TextField, ToastOptions};

use crate::session::use_session;

/// The signed-in user's details, editable for the rest of the session.
#[component]
pub fn ProfilePage() -> Element {
    let mut session = use_session();
    let toast = use_toast();

    let user = session.user();
    let role = session.role();

    let mut name = use_signal({
        let name = user.name.clone();
        move || name
    });
    let mut email = use_signal({
        let email = user.email.clone();
        move || email
    });

    let handle_save = move |_: ()| {
        let new_name = name.read().trim().to_string();
        let new_email = email.read().trim().to_string();
        let mut user = session.user();
        if !new_name.is_empty() {
            user.name = new_name;
        }
        user.email = new_email;
        session.set_user(user);
        tracing::debug!("profile updated");
        toast.success("Profile updated".to_string(), ToastOptions::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }
        div { class: "settings-page",
            PageHeader { title: "Profile" }
            Card {
                div { class: "profile-summary",
                    span { class: "profile-avatar", "{user.initials()}" }
                    div {
                        h2 { "{user.display_name()}" }
                        Badge { tone: BadgeTone::Accent, "{role.display_name()}" }
                        if let Some(inst) = user.institution.as_ref() {
                            p { class: "profile-institution", "{inst}" }
                        }
                    }
                }
            }
            Card { title: "Details",
                Form { on_submit: handle_save,
                    TextField {
                        label: "Name",
                        value: name(),
                        on_input: move |text: String| name.set(text),
                    }
                    TextField {
                        label: "Email",
                        kind: "email",
                        value: email(),
                        on_input: move |text: String| email.set(text),
                    }
                    Button { submit: true, "Save changes" }
                }
            }
        }
    }
}
