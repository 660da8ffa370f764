use crate::session::{use_role, use_session};
use dioxus::prelude::*;
use shared_types::Role;

/// Whether the signed-in user holds one of `roles`.
pub fn use_role_check(roles: &[Role]) -> bool {
    let role = use_role();
    use_session().is_authenticated() && roles.contains(&role)
}

/// Conditionally render children based on the user's role.
/// Shows `fallback` to every other role.
#[component]
pub fn RoleGate(roles: Vec<Role>, fallback: Element, children: Element) -> Element {
    let allowed = use_role_check(&roles);

    if allowed {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}
