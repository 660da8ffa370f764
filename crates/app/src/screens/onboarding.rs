use dioxus::prelude::*;
use shared_types::{AppConfig, Screen};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardFooter, Form, FormRow, TextField, ToastOptions,
};

use crate::session::use_session;

use super::login::Login;

/// One of the screens reachable before sign-in.
#[component]
pub fn PublicScreen(screen: Screen) -> Element {
    match screen {
        Screen::Onboarding => rsx! { OnboardingHub {} },
        Screen::OnboardingLanding => rsx! { SchoolLanding {} },
        Screen::TeacherOnboarding => rsx! {
            SignupForm {
                key: "teacher",
                title: "Join as a teacher",
                description: "Your school admin will confirm your account before first sign-in.",
                fields: vec!["Full name", "School email", "Subject", "School code"],
                steps: vec!["Submit your details", "Admin approves your account", "Sign in and set up your classes"],
            }
        },
        Screen::StudentOnboarding => rsx! {
            SignupForm {
                key: "student",
                title: "Join as a student",
                description: "Use the admission number from your welcome letter.",
                fields: vec!["Full name", "Admission number", "Grade and section", "Guardian email"],
                steps: vec!["Submit your details", "Your class teacher verifies them", "Sign in to see your courses"],
            }
        },
        _ => rsx! { Login {} },
    }
}

/// Entry point that sends each kind of visitor to their own flow.
#[component]
fn OnboardingHub() -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();

    let paths = [
        (Screen::OnboardingLanding, "I run a school", "Set up your institution"),
        (Screen::TeacherOnboarding, "I teach", "Join your school's staff"),
        (Screen::StudentOnboarding, "I study", "Find your classes and homework"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card {
                class: "auth-card wide",
                eyebrow: config.shell.app_name.clone(),
                title: "Get started",
                description: "Tell us who you are and we will set up the right workspace.",
                div { class: "onboarding-paths",
                    for (target, heading, blurb) in paths {
                        button {
                            class: "onboarding-path",
                            r#type: "button",
                            onclick: move |_| session.navigate(target),
                            strong { "{heading}" }
                            span { "{blurb}" }
                        }
                    }
                }
                CardFooter {
                    BackToSignIn {}
                }
            }
        }
    }
}

/// Pitch page for schools evaluating the product.
#[component]
fn SchoolLanding() -> Element {
    let mut session = use_session();
    let config: AppConfig = use_context();
    let toast = use_toast();

    let mut school = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut email = use_signal(String::new);

    let features = [
        ("Admissions to alumni", "One record per student, from enquiry to graduation."),
        ("Fees without spreadsheets", "Invoices, reminders and receipts for every family."),
        ("Parents in the loop", "Homework, grades and notices on their phone."),
    ];

    let handle_submit = move |_: ()| {
        let name = school.read().trim().to_string();
        tracing::info!(school = %name, "school registration requested");
        toast.success(
            "Thanks! Our onboarding team will contact you within a day.".to_string(),
            ToastOptions::new(),
        );
        school.set(String::new());
        contact.set(String::new());
        email.set(String::new());
        session.navigate(Screen::Login);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card wide",
                div { class: "landing-hero",
                    div { class: "auth-brand", "{config.shell.app_name}" }
                    h1 { "Run your whole school from one place" }
                    p { "Dashboards for admins, teachers, students and parents." }
                }
                div { class: "landing-features",
                    for (heading, blurb) in features {
                        div { class: "onboarding-path",
                            strong { "{heading}" }
                            span { "{blurb}" }
                        }
                    }
                }
                Form { on_submit: handle_submit,
                    FormRow {
                        TextField {
                            label: "School name",
                            value: school(),
                            on_input: move |text: String| school.set(text),
                        }
                        TextField {
                            label: "Your name",
                            value: contact(),
                            on_input: move |text: String| contact.set(text),
                        }
                    }
                    TextField {
                        label: "Work email",
                        kind: "email",
                        value: email(),
                        on_input: move |text: String| email.set(text),
                    }
                    Button { submit: true, "Request a demo" }
                }
                CardFooter {
                    BackToSignIn {}
                }
            }
        }
    }
}

/// Sign-up form for people joining an existing school.
#[component]
fn SignupForm(
    title: String,
    description: String,
    fields: Vec<&'static str>,
    steps: Vec<&'static str>,
) -> Element {
    let mut session = use_session();
    let toast = use_toast();

    let field_count = fields.len();
    let mut values = use_signal(move || vec![String::new(); field_count]);

    let handle_submit = move |_: ()| {
        let filled = values.read().iter().filter(|v| !v.trim().is_empty()).count();
        tracing::info!(filled, "sign-up submitted");
        toast.success(
            "Request sent. You can sign in once it is approved.".to_string(),
            ToastOptions::new(),
        );
        session.navigate(Screen::Login);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: title.clone(),
                description: description.clone(),
                ol { class: "onboarding-steps",
                    for step in steps.iter() {
                        li { "{step}" }
                    }
                }
                Form { on_submit: handle_submit,
                    for (index, field) in fields.iter().enumerate() {
                        TextField {
                            label: field.to_string(),
                            value: values.read()[index].clone(),
                            on_input: move |text: String| values.write()[index] = text,
                        }
                    }
                    Button { submit: true, "Continue to sign in" }
                }
                CardFooter {
                    BackToSignIn {}
                }
            }
        }
    }
}

#[component]
fn BackToSignIn() -> Element {
    let mut session = use_session();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| session.navigate(Screen::Login),
            "Back to sign in"
        }
    }
}
