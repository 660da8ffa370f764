use dioxus::prelude::*;

/// Table with a fixed header row. Rows go in as children.
#[component]
pub fn DataTable(columns: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns {
                            th { scope: "col", "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when there is nothing to list.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
        }
    }
}
