//! End-to-end navigation scenarios against the session model.

use crate::common::signed_in;
use pretty_assertions::assert_eq;
use shared_types::{
    select_layout_variant, DashboardView, LayoutVariant, Role, Screen, Session, UserData, View,
};

#[test]
fn teacher_signs_in_and_opens_gradebook() {
    let mut session = Session::new();
    assert_eq!(session.view(), View::Login);

    session.login(Role::Teacher, UserData::new("T"));
    assert_eq!(
        session.view(),
        View::Dashboard(DashboardView::for_role(Role::Teacher))
    );

    session.navigate("gradebook");
    assert_eq!(
        session.view(),
        View::Screen {
            screen: Screen::Gradebook
        }
    );
}

#[test]
fn student_asking_for_gradebook_sees_placeholder() {
    let mut session = signed_in(Role::Student);
    session.navigate("gradebook");
    assert_eq!(
        session.view(),
        View::Placeholder {
            feature: Screen::Gradebook,
            role: Role::Student
        }
    );
    assert_eq!(session.view().title(), "Gradebook");
}

#[test]
fn parent_asking_for_admin_screen_is_sent_home() {
    let mut session = signed_in(Role::Parent);
    session.navigate(Screen::Students);
    assert_eq!(
        session.view(),
        View::Dashboard(DashboardView::for_role(Role::Parent))
    );
}

#[test]
fn visitor_browses_onboarding_then_signs_in() {
    let mut session = Session::new();
    session.navigate(Screen::OnboardingLanding);
    assert_eq!(
        session.view(),
        View::Public {
            screen: Screen::OnboardingLanding
        }
    );

    session.navigate(Screen::Settings);
    assert_eq!(session.view(), View::Login);

    session.login(Role::Student, UserData::new("Ana Lopez"));
    session.navigate(Screen::OnboardingLanding);
    assert!(session.view().is_dashboard());
}

#[test]
fn student_on_phone_gets_mobile_layout_and_collapsed_sidebar() {
    let mut session = signed_in(Role::Student);
    session.on_resize(390);
    assert!(session.sidebar_collapsed);
    assert_eq!(select_layout_variant(session.role, 390), LayoutVariant::Mobile);
    assert_eq!(
        DashboardView::for_role(session.role).mobile,
        Some(shared_types::DashboardKind::StudentMobile)
    );
}

#[test]
fn admin_on_phone_is_asked_for_a_desktop() {
    let mut session = signed_in(Role::InstitutionAdmin);
    session.on_resize(390);
    assert_eq!(
        select_layout_variant(session.role, 390),
        LayoutVariant::DesktopRequired
    );
    session.logout();
    assert!(!session.sidebar_collapsed);
}
