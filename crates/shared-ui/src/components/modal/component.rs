use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
                {children}
            }
        }
    }
}

#[component]
pub fn ModalHeader(children: Element) -> Element {
    rsx! {
        div { class: "modal-header", {children} }
    }
}

#[component]
pub fn ModalTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "modal-title", {children} }
    }
}

#[component]
pub fn ModalDescription(children: Element) -> Element {
    rsx! {
        p { class: "modal-description", {children} }
    }
}

#[component]
pub fn ModalBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-body", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Right-aligned action row.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        div { class: "modal-footer", {children} }
    }
}
