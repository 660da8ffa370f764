//! Dashboard dispatch tests

use crate::common::resolve_as;
use shared_types::catalog::dashboard_stats;
use shared_types::{DashboardKind, DashboardView, Role, Screen, View};

#[test]
fn each_role_gets_its_own_desktop_dashboard() {
    let kinds: Vec<DashboardKind> = Role::ALL
        .into_iter()
        .map(|role| DashboardView::for_role(role).desktop)
        .collect();
    for (i, kind) in kinds.iter().enumerate() {
        assert!(!kinds[i + 1..].contains(kind), "{kind:?} shared between roles");
        assert!(!kind.is_mobile());
    }
}

#[test]
fn mobile_variant_exists_exactly_for_mobile_roles() {
    for role in Role::ALL {
        let view = DashboardView::for_role(role);
        assert_eq!(view.mobile.is_some(), role.has_mobile_layout(), "{role}");
        if let Some(mobile) = view.mobile {
            assert!(mobile.is_mobile());
        }
    }
}

#[test]
fn dashboard_request_dispatches_by_role() {
    for role in Role::ALL {
        assert_eq!(
            resolve_as(role, Screen::Dashboard),
            View::Dashboard(DashboardView::for_role(role))
        );
    }
}

#[test]
fn every_variant_has_stats() {
    for role in Role::ALL {
        for kind in DashboardView::for_role(role).variants() {
            assert!(!dashboard_stats(kind).is_empty(), "{} has no stats", kind.as_str());
        }
    }
}
