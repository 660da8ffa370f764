use dioxus::prelude::*;
use shared_types::{AppConfig, Role, Screen, UserData};
use shared_ui::{Button, ButtonVariant, Card, CardFooter, Form, TextField};

use crate::session::use_session;

/// Sample account for each role, used by the one-click sign-in buttons and
/// when the name field is left blank.
pub fn demo_user(role: Role, institution: Option<&str>) -> UserData {
    let (name, email) = match role {
        Role::SuperAdmin => ("Nisha Kapoor", "nisha@campusly.app"),
        Role::InstitutionAdmin => ("Vikram Sethi", "principal@greenwood.edu"),
        Role::Teacher => ("Priya Shah", "priya.shah@greenwood.edu"),
        Role::Student => ("Aarav Mehta", "aarav.mehta@greenwood.edu"),
        Role::Parent => ("Rohan Mehta", "rohan.mehta@example.com"),
    };
    let user = UserData::new(name).with_email(email);
    match (role, institution) {
        (Role::SuperAdmin, _) | (_, None) => user,
        (_, Some(inst)) => user.with_institution(inst),
    }
}

/// Account for a sign-in form submission. A blank name falls back to the
/// role's sample account, still keeping any email that was typed.
pub fn form_user(role: Role, name: &str, email: &str, institution: Option<&str>) -> UserData {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() {
        let user = demo_user(role, institution);
        return if email.is_empty() { user } else { user.with_email(email) };
    }
    let mut user = UserData::new(name).with_email(email);
    user.institution = institution.map(str::to_string);
    user
}

/// Footer links into the public onboarding flows.
const ONBOARDING_LINKS: [(Screen, &str); 3] = [
    (Screen::Onboarding, "Get started"),
    (Screen::TeacherOnboarding, "Joining as a teacher"),
    (Screen::StudentOnboarding, "Joining as a student"),
];

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(Role::default);

    let institution = config.shell.institution.clone();

    let handle_submit = {
        let institution = institution.clone();
        move |_: ()| {
            let chosen = role();
            let user = form_user(chosen, &name.read(), &email.read(), institution.as_deref());
            tracing::info!(role = %chosen, "signing in");
            session.login(chosen, user);
        }
    };

    let description = institution
        .clone()
        .unwrap_or_else(|| "School management for every role".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card {
                class: "auth-card",
                eyebrow: config.shell.app_name.clone(),
                title: "Sign in",
                description,
                Form { on_submit: handle_submit,
                    TextField {
                        label: "Name",
                        value: name(),
                        placeholder: "Leave blank to use the sample account",
                        on_input: move |text: String| name.set(text),
                    }
                    TextField {
                        label: "Email",
                        kind: "email",
                        value: email(),
                        on_input: move |text: String| email.set(text),
                    }
                    div { class: "text-field",
                        label { class: "text-field-label", r#for: "login-role", "Role" }
                        select {
                            id: "login-role",
                            class: "text-field-input",
                            value: role().as_str(),
                            onchange: move |e: FormEvent| role.set(Role::from_str_or_default(&e.value())),
                            for choice in Role::ALL {
                                option { value: choice.as_str(), "{choice.display_name()}" }
                            }
                        }
                    }
                    Button { submit: true, "Sign in" }
                }

                if config.features.demo_roles {
                    div { class: "auth-demo",
                        p { class: "auth-demo-label", "Or explore a demo account" }
                        div { class: "auth-demo-grid",
                            for demo in Role::ALL {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let institution = institution.clone();
                                        move |_| {
                                            tracing::info!(role = %demo, "demo sign-in");
                                            session.login(demo, demo_user(demo, institution.as_deref()));
                                        }
                                    },
                                    "{demo.display_name()}"
                                }
                            }
                        }
                    }
                }

                if config.features.onboarding {
                    CardFooter {
                        div { class: "auth-links",
                            button {
                                class: "auth-link",
                                r#type: "button",
                                onclick: move |_| session.navigate(Screen::OnboardingLanding),
                                "New to {config.shell.app_name}? Register your school"
                            }
                            for (target, label) in ONBOARDING_LINKS {
                                button {
                                    class: "auth-link",
                                    r#type: "button",
                                    onclick: move |_| session.navigate(target),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
