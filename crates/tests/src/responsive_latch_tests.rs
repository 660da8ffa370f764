//! Sidebar auto-collapse and layout selection tests

use crate::common::signed_in;
use shared_types::{
    select_layout_variant, shell_plan, LayoutVariant, Narrow, Role, Session, MOBILE_BREAKPOINT,
};

fn collapsed_after(widths: &[u32]) -> bool {
    let mut session = Session::new();
    for width in widths {
        session.on_resize(*width);
    }
    session.sidebar_collapsed
}

#[test]
fn one_narrow_width_latches_collapsed() {
    assert!(collapsed_after(&[1440, 500, 1440]));
    assert!(collapsed_after(&[MOBILE_BREAKPOINT - 1]));
    assert!(collapsed_after(&[0, 4000, 4000]));
}

#[test]
fn wide_only_sequences_leave_sidebar_alone() {
    assert!(!collapsed_after(&[]));
    assert!(!collapsed_after(&[MOBILE_BREAKPOINT, 1024, 2560]));
}

#[test]
fn widening_never_expands_a_manually_collapsed_sidebar() {
    let mut session = signed_in(Role::Teacher);
    session.toggle_sidebar();
    session.on_resize(1920);
    assert!(session.sidebar_collapsed);
}

#[test]
fn user_can_reopen_after_latch() {
    let mut session = signed_in(Role::Student);
    session.on_resize(375);
    assert!(session.sidebar_collapsed);
    session.toggle_sidebar();
    assert!(!session.sidebar_collapsed);
    session.on_resize(1280);
    assert!(!session.sidebar_collapsed);
}

#[test]
fn layout_variant_matches_shell_plan() {
    for role in Role::ALL {
        for width in [0, 320, MOBILE_BREAKPOINT - 1, MOBILE_BREAKPOINT, 1920] {
            let variant = select_layout_variant(role, width);
            let expected = if width >= MOBILE_BREAKPOINT {
                LayoutVariant::Desktop
            } else {
                match shell_plan(role).narrow {
                    Narrow::MobileShell => LayoutVariant::Mobile,
                    Narrow::DesktopRequired => LayoutVariant::DesktopRequired,
                }
            };
            assert_eq!(variant, expected, "{role} at {width}px");
        }
    }
}

#[test]
fn mobile_shell_only_for_roles_with_mobile_layout() {
    for role in Role::ALL {
        assert_eq!(
            shell_plan(role).narrow == Narrow::MobileShell,
            role.has_mobile_layout()
        );
    }
}
