use dioxus::prelude::*;
use shared_types::catalog::{filter_records, next_id, records_for, Record, RecordStatus};
use shared_types::{Role, Screen};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, Form, Modal, ModalBody, ModalDescription, ModalFooter,
    ModalHeader, ModalTitle, PageHeader, SearchBar, TextField, ToastOptions,
};

use crate::role_gate::RoleGate;

pub(crate) fn status_tone(status: RecordStatus) -> BadgeTone {
    match status {
        RecordStatus::Active => BadgeTone::Success,
        RecordStatus::Pending => BadgeTone::Warning,
        RecordStatus::Overdue => BadgeTone::Danger,
        RecordStatus::Closed => BadgeTone::Neutral,
    }
}

/// Label for the create action, or `None` for read-only lists.
fn create_label(screen: Screen) -> Option<&'static str> {
    match screen {
        Screen::Institutions => Some("Add institution"),
        Screen::MasterData => Some("Add master list"),
        Screen::Subscriptions => Some("New subscription"),
        Screen::Students => Some("Add student"),
        Screen::Teachers => Some("Add teacher"),
        Screen::Classes => Some("Add class"),
        Screen::Admissions => Some("New application"),
        Screen::FeeManagement => Some("New fee head"),
        Screen::Timetable => Some("Add timetable"),
        Screen::Gradebook => Some("New assessment"),
        Screen::Attendance => Some("Mark attendance"),
        Screen::Assignments => Some("New assignment"),
        Screen::LessonPlans => Some("New lesson plan"),
        Screen::Notifications => Some("New announcement"),
        Screen::Messages => Some("New message"),
        _ => None,
    }
}

/// Roles that may use the create action on an any-role screen.
fn creators(screen: Screen) -> Vec<Role> {
    match screen {
        Screen::Notifications => vec![Role::SuperAdmin, Role::InstitutionAdmin, Role::Teacher],
        _ => Role::ALL.to_vec(),
    }
}

/// Searchable list view used by every dedicated list screen.
///
/// Rows start from the mock catalog; additions and removals stay in this
/// component and vanish when it unmounts.
#[component]
pub fn RecordsPage(screen: Screen) -> Element {
    let toast = use_toast();

    let mut records = use_signal(move || records_for(screen));
    let mut query = use_signal(String::new);
    let mut show_modal = use_signal(|| false);
    let mut form_title = use_signal(String::new);
    let mut form_detail = use_signal(String::new);

    let visible = filter_records(&records.read(), &query.read());
    let total = records.read().len();
    let filtered = !query.read().trim().is_empty();
    let modal_title = create_label(screen).unwrap_or("New entry");

    let open_create = move |_| {
        form_title.set(String::new());
        form_detail.set(String::new());
        show_modal.set(true);
    };

    let handle_save = move |_: ()| {
        let title = form_title.read().trim().to_string();
        if title.is_empty() {
            toast.error("Give the entry a name first.".to_string(), ToastOptions::new());
            return;
        }
        let record = Record {
            id: next_id(&records.read()),
            title: title.clone(),
            detail: form_detail.read().trim().to_string(),
            status: RecordStatus::Pending,
        };
        tracing::debug!(screen = %screen, id = record.id, "record added");
        records.write().push(record);
        show_modal.set(false);
        toast.success(format!("{title} saved"), ToastOptions::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./records.css") }
        div { class: "records-page", "data-screen": screen.key(),
            PageHeader {
                title: screen.title().to_string(),
                description: screen.description().to_string(),
                if let Some(label) = create_label(screen) {
                    RoleGate {
                        roles: creators(screen),
                        fallback: rsx! {},
                        Button { onclick: open_create, "{label}" }
                    }
                }
            }

            SearchBar {
                value: query(),
                on_search: move |q: String| query.set(q),
                placeholder: format!("Search {}", screen.title().to_lowercase()),
                span { class: "records-count",
                    if filtered {
                        "{visible.len()} of {total}"
                    } else {
                        "{total} total"
                    }
                }
            }

            Card {
                DataTable { columns: vec!["Name", "Details", "Status", ""],
                    if visible.is_empty() {
                        DataTableEmpty { columns: 4usize,
                            if filtered {
                                "No results for {query}."
                            } else {
                                "Nothing here yet."
                            }
                        }
                    }
                    for record in visible.iter().cloned() {
                        RecordRow {
                            key: "{record.id}",
                            record,
                            on_remove: move |id: u32| {
                                let removed = {
                                    let mut rows = records.write();
                                    let before = rows.len();
                                    rows.retain(|r| r.id != id);
                                    before != rows.len()
                                };
                                if removed {
                                    tracing::debug!(screen = %screen, id, "record removed");
                                    toast.success("Entry removed".to_string(), ToastOptions::new());
                                }
                            },
                        }
                    }
                }
            }

            Modal {
                open: show_modal(),
                on_close: move |_| show_modal.set(false),
                ModalHeader {
                    ModalTitle { "{modal_title}" }
                    ModalDescription { "Saved for this session only." }
                }
                Form { on_submit: handle_save,
                    ModalBody {
                        TextField {
                            label: "Name",
                            value: form_title(),
                            on_input: move |text: String| form_title.set(text),
                        }
                        TextField {
                            label: "Details",
                            value: form_detail(),
                            on_input: move |text: String| form_detail.set(text),
                        }
                    }
                    ModalFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_modal.set(false),
                            "Cancel"
                        }
                        Button { submit: true, "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordRow(record: Record, on_remove: EventHandler<u32>) -> Element {
    let id = record.id;

    rsx! {
        DataTableRow {
            DataTableCell { span { class: "records-title", "{record.title}" } }
            DataTableCell { span { class: "records-detail", "{record.detail}" } }
            DataTableCell {
                Badge { tone: status_tone(record.status), dot: true, "{record.status.label()}" }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    aria_label: "Remove {record.title}",
                    onclick: move |_| on_remove.call(id),
                    "Remove"
                }
            }
        }
    }
}
