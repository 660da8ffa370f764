//! Navigation menu tests
//!
//! Nothing in a role's sidebar or tab bar may lead to a screen the role
//! would be bounced away from.

use crate::common::resolve_as;
use shared_types::menu::{bottom_tabs, sidebar_items, sidebar_sections};
use shared_types::{Role, Screen, View};

fn reachable(role: Role, screen: Screen) -> bool {
    match resolve_as(role, screen) {
        View::Dashboard(_) => screen == Screen::Dashboard,
        View::Screen { screen: shown } => shown == screen,
        _ => false,
    }
}

#[test]
fn sidebar_entries_are_reachable() {
    for role in Role::ALL {
        for entry in sidebar_items(role) {
            assert!(
                reachable(role, entry.screen),
                "{role} sidebar links to {}",
                entry.screen
            );
        }
    }
}

#[test]
fn bottom_tabs_are_reachable() {
    for role in Role::ALL {
        for tab in bottom_tabs(role) {
            assert!(reachable(role, tab.screen), "{role} tab links to {}", tab.screen);
        }
    }
}

#[test]
fn tabs_only_for_mobile_roles() {
    for role in Role::ALL {
        assert_eq!(!bottom_tabs(role).is_empty(), role.has_mobile_layout(), "{role}");
    }
}

#[test]
fn every_owned_screen_is_in_its_owners_sidebar() {
    for role in Role::ALL {
        let listed: Vec<Screen> = sidebar_items(role).map(|e| e.screen).collect();
        for screen in shared_types::policy::owned_by(role) {
            assert!(listed.contains(&screen), "{screen} missing from {role} sidebar");
        }
    }
}

#[test]
fn sections_are_labelled_and_non_empty() {
    for role in Role::ALL {
        for section in sidebar_sections(role) {
            assert!(!section.label.is_empty());
            assert!(!section.items.is_empty(), "{role} has empty {}", section.label);
        }
    }
}

#[test]
fn exactly_one_entry_is_active_on_each_reachable_view() {
    for role in Role::ALL {
        for entry in sidebar_items(role) {
            let view = resolve_as(role, entry.screen);
            let active = sidebar_items(role).filter(|e| e.is_active(&view)).count();
            assert_eq!(active, 1, "{role} on {}", entry.screen);
        }
    }
}
