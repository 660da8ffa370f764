use dioxus::prelude::*;

/// Row that holds the sidebar and the main column. `collapsed` comes from
/// the caller's session state; the provider only reflects it.
#[component]
pub fn SidebarProvider(collapsed: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-collapsed": if collapsed { "true" } else { "false" },
            {children}
        }
    }
}

/// The navigation column. Shrinks to an icon rail when collapsed.
#[component]
pub fn Sidebar(collapsed: bool, children: Element) -> Element {
    rsx! {
        aside {
            class: "sidebar",
            "data-state": if collapsed { "collapsed" } else { "expanded" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        header { class: "sidebar-header", {children} }
    }
}

/// Scrolling middle part holding the groups.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", "aria-label": "Main", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        footer { class: "sidebar-footer", {children} }
    }
}

/// Labelled list of entries. The label hides while collapsed.
#[component]
pub fn SidebarGroup(label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            div { class: "sidebar-group-label", "{label}" }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

/// One entry of a [`SidebarGroup`]. `label` doubles as the tooltip in the
/// icon rail.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    label: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                title: "{label}",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| onclick.call(evt),
                {children}
                span { class: "sidebar-menu-label", "{label}" }
            }
        }
    }
}

/// Button that asks the owner to flip the collapsed flag.
#[component]
pub fn SidebarTrigger(
    on_toggle: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| on_toggle.call(()),
            ..merged,
            {children}
        }
    }
}

/// Main column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
