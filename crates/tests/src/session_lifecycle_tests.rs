//! Session lifecycle tests

use crate::common::signed_in;
use pretty_assertions::assert_eq;
use shared_types::{DashboardView, Role, Screen, ScreenKey, Session, UserData, View};

#[test]
fn login_always_lands_on_dashboard() {
    for role in Role::ALL {
        let mut session = Session::new();
        session.navigate(Screen::StudentOnboarding);
        session.login(role, UserData::new("Someone"));
        assert_eq!(session.current_screen, ScreenKey::Known(Screen::Dashboard));
        assert_eq!(session.view(), View::Dashboard(DashboardView::for_role(role)));
    }
}

#[test]
fn logout_restores_defaults_from_any_state() {
    for role in Role::ALL {
        let mut session = signed_in(role);
        session.navigate("somewhere-unknown");
        session.toggle_sidebar();
        session.on_resize(320);
        session.logout();
        assert_eq!(session, Session::default());
        assert_eq!(session.view(), View::Login);
    }
}

#[test]
fn navigate_stores_raw_requests() {
    let mut session = signed_in(Role::Teacher);
    session.navigate("not-a-screen");
    assert_eq!(
        session.current_screen,
        ScreenKey::Unrecognized("not-a-screen".to_string())
    );
    assert!(session.view().is_dashboard());
}

#[test]
fn navigate_does_not_touch_identity() {
    let mut session = signed_in(Role::Parent);
    let before = session.clone();
    session.navigate(Screen::Institutions);
    assert_eq!(session.role, before.role);
    assert_eq!(session.user, before.user);
    assert_eq!(session.is_authenticated, before.is_authenticated);
    assert_eq!(session.sidebar_collapsed, before.sidebar_collapsed);
}

#[test]
fn relogin_switches_role() {
    let mut session = signed_in(Role::Student);
    session.navigate(Screen::Homework);
    session.logout();
    session.login(Role::Teacher, UserData::new("Ms Ortiz"));
    assert_eq!(session.role, Role::Teacher);
    session.navigate(Screen::Homework);
    assert_eq!(
        session.view(),
        View::Placeholder {
            feature: Screen::Homework,
            role: Role::Teacher
        }
    );
}

#[test]
fn session_snapshot_roundtrips_through_json() {
    let mut session = signed_in(Role::InstitutionAdmin);
    session.navigate("students");
    let json = serde_json::to_string(&session).unwrap();
    assert!(json.contains("\"institution_admin\""));
    assert!(json.contains("\"students\""));
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}
