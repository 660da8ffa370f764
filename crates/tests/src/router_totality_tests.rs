//! Router totality tests
//!
//! Every (screen, role, authenticated) combination resolves to exactly one
//! view, and resolution never depends on anything but its inputs.

use crate::common::{all_keys, GARBAGE_KEYS};
use shared_types::{resolve, DashboardView, Role, Screen, ScreenKey, View};

#[test]
fn every_combination_resolves() {
    for key in all_keys() {
        for role in Role::ALL {
            for authenticated in [false, true] {
                let view = resolve(&key, role, authenticated);
                assert!(
                    !view.title().is_empty(),
                    "{key} as {role} (auth={authenticated}) has no title"
                );
            }
        }
    }
}

#[test]
fn resolution_is_deterministic() {
    for key in all_keys() {
        for role in Role::ALL {
            assert_eq!(resolve(&key, role, true), resolve(&key, role, true));
            assert_eq!(resolve(&key, role, false), resolve(&key, role, false));
        }
    }
}

#[test]
fn signed_in_never_sees_login_or_public_views() {
    for key in all_keys() {
        for role in Role::ALL {
            let view = resolve(&key, role, true);
            assert!(
                !matches!(view, View::Login | View::Public { .. }),
                "{key} as {role} leaked {view:?}"
            );
        }
    }
}

#[test]
fn garbage_keys_land_on_the_role_dashboard() {
    for raw in GARBAGE_KEYS {
        for role in Role::ALL {
            assert_eq!(
                resolve(&ScreenKey::parse(raw), role, true),
                View::Dashboard(DashboardView::for_role(role)),
                "garbage key {raw:?} as {role}"
            );
        }
    }
}

#[test]
fn dashboard_views_always_belong_to_the_requesting_role() {
    for key in all_keys() {
        for role in Role::ALL {
            if let View::Dashboard(dashboard) = resolve(&key, role, true) {
                assert_eq!(dashboard.role, role);
            }
        }
    }
}

#[test]
fn placeholders_name_the_requested_feature() {
    for screen in Screen::ALL {
        for role in Role::ALL {
            if let View::Placeholder { feature, role: shown } = resolve(&screen.into(), role, true) {
                assert_eq!(feature, screen);
                assert_eq!(shown, role);
            }
        }
    }
}
