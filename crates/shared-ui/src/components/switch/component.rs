use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// A switch with a label and optional hint, laid out as one settings row.
#[component]
pub fn SwitchField(
    label: String,
    #[props(default)] description: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "switch-field",
            div { class: "switch-field-text",
                span { class: "switch-field-label", "{label}" }
                if !description.is_empty() {
                    span { class: "switch-field-description", "{description}" }
                }
            }
            Switch {
                checked: Some(checked),
                on_checked_change: move |val: bool| on_change.call(val),
                SwitchThumb {}
            }
        }
    }
}
