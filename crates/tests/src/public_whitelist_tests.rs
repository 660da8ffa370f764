//! Signed-out access tests

use crate::common::all_keys;
use shared_types::policy::{is_public, PUBLIC_SCREENS};
use shared_types::{resolve, Role, Screen, View};

#[test]
fn only_onboarding_screens_are_public() {
    assert_eq!(
        PUBLIC_SCREENS,
        [
            Screen::Onboarding,
            Screen::OnboardingLanding,
            Screen::TeacherOnboarding,
            Screen::StudentOnboarding,
        ]
    );
}

#[test]
fn signed_out_whitelist_or_login() {
    for key in all_keys() {
        for role in Role::ALL {
            let view = resolve(&key, role, false);
            match key.screen() {
                Some(screen) if is_public(screen) => {
                    assert_eq!(view, View::Public { screen });
                }
                _ => assert_eq!(view, View::Login, "{key} leaked while signed out"),
            }
        }
    }
}

#[test]
fn role_is_ignored_while_signed_out() {
    for key in all_keys() {
        let first = resolve(&key, Role::SuperAdmin, false);
        for role in Role::ALL {
            assert_eq!(resolve(&key, role, false), first);
        }
    }
}

#[test]
fn login_screen_itself_is_not_public() {
    assert!(!is_public(Screen::Login));
    assert_eq!(resolve(&Screen::Login.into(), Role::Teacher, false), View::Login);
}
