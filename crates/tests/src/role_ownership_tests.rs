//! Role ownership tests
//!
//! Owned screens render their component only for the owning role; shared
//! screens render it for everyone.

use crate::common::resolve_as;
use shared_types::policy::{self, owned_by, owner, Access, Fallback};
use shared_types::{DashboardView, Role, Screen, View};

#[test]
fn owned_screen_renders_only_for_owner() {
    for screen in Screen::ALL {
        let Some(owner) = owner(screen) else { continue };
        for role in Role::ALL {
            let view = resolve_as(role, screen);
            if role == owner {
                assert_eq!(view, View::Screen { screen });
            } else {
                assert_ne!(
                    view.dedicated_screen(),
                    Some(screen),
                    "{role} reached {screen}"
                );
            }
        }
    }
}

#[test]
fn non_owners_get_the_declared_fallback() {
    for screen in Screen::ALL {
        let rule = policy::rule(screen);
        let Access::Owner(owner) = rule.access else { continue };
        for role in Role::ALL.into_iter().filter(|r| *r != owner) {
            let expected = match rule.fallback {
                Fallback::Dashboard => View::Dashboard(DashboardView::for_role(role)),
                Fallback::Placeholder => View::Placeholder { feature: screen, role },
            };
            assert_eq!(resolve_as(role, screen), expected, "{screen} as {role}");
        }
    }
}

#[test]
fn shared_screens_render_for_every_role() {
    for screen in [Screen::Settings, Screen::Profile, Screen::Notifications, Screen::Messages] {
        for role in Role::ALL {
            assert_eq!(resolve_as(role, screen), View::Screen { screen });
        }
    }
}

#[test]
fn ownership_partitions_role_screens() {
    let mut seen = Vec::new();
    for role in Role::ALL {
        for screen in owned_by(role) {
            assert!(!seen.contains(&screen), "{screen} owned twice");
            seen.push(screen);
        }
    }
    assert!(seen.contains(&Screen::Institutions));
    assert!(seen.contains(&Screen::ProgressReports));
}

#[test]
fn allowed_screens_agree_with_resolution() {
    for role in Role::ALL {
        for screen in role.allowed_screens() {
            let view = resolve_as(role, screen);
            assert!(
                view.dedicated_screen() == Some(screen) || view.is_dashboard(),
                "{role} allowed {screen} but got {view:?}"
            );
        }
    }
}
