//! Declarative role/screen policy.
//!
//! One row per screen says who may open it and what everyone else sees
//! instead. The router consults this table and nothing else, so the whole
//! authorization story can be audited here.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::screen::Screen;

/// Who may open a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "role")]
pub enum Access {
    /// Reachable before sign-in; a signed-in user is sent to their dashboard.
    Public,
    /// Dispatched per role to one of the dashboard variants.
    Dashboard,
    /// Same component for every signed-in role.
    AnyRole,
    /// Reserved for a single role.
    Owner(Role),
}

/// What a signed-in role that does not own a screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    Dashboard,
    Placeholder,
}

/// A row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRule {
    pub access: Access,
    pub fallback: Fallback,
}

impl ScreenRule {
    const fn public() -> Self {
        Self {
            access: Access::Public,
            fallback: Fallback::Dashboard,
        }
    }

    const fn shared() -> Self {
        Self {
            access: Access::AnyRole,
            fallback: Fallback::Dashboard,
        }
    }

    const fn owned(role: Role, fallback: Fallback) -> Self {
        Self {
            access: Access::Owner(role),
            fallback,
        }
    }

    /// Whether a signed-in `role` gets this screen's own component.
    pub fn admits(&self, role: Role) -> bool {
        match self.access {
            Access::Public => false,
            Access::Dashboard | Access::AnyRole => true,
            Access::Owner(owner) => owner == role,
        }
    }

    pub fn owner(&self) -> Option<Role> {
        match self.access {
            Access::Owner(role) => Some(role),
            _ => None,
        }
    }
}

/// The policy table. Fallbacks are stated per row; there is no rule that
/// derives one from another.
pub fn rule(screen: Screen) -> ScreenRule {
    use Fallback::{Dashboard as ToDashboard, Placeholder};
    use Role::*;

    match screen {
        Screen::Login
        | Screen::Onboarding
        | Screen::OnboardingLanding
        | Screen::TeacherOnboarding
        | Screen::StudentOnboarding => ScreenRule::public(),

        Screen::Dashboard => ScreenRule {
            access: Access::Dashboard,
            fallback: ToDashboard,
        },

        Screen::Settings | Screen::Profile | Screen::Notifications | Screen::Messages => {
            ScreenRule::shared()
        }

        Screen::Institutions => ScreenRule::owned(SuperAdmin, ToDashboard),
        Screen::MasterData => ScreenRule::owned(SuperAdmin, ToDashboard),
        Screen::Subscriptions => ScreenRule::owned(SuperAdmin, Placeholder),
        Screen::PlatformAnalytics => ScreenRule::owned(SuperAdmin, Placeholder),

        Screen::Students => ScreenRule::owned(InstitutionAdmin, ToDashboard),
        Screen::Teachers => ScreenRule::owned(InstitutionAdmin, ToDashboard),
        Screen::Classes => ScreenRule::owned(InstitutionAdmin, Placeholder),
        Screen::Admissions => ScreenRule::owned(InstitutionAdmin, Placeholder),
        Screen::FeeManagement => ScreenRule::owned(InstitutionAdmin, Placeholder),
        Screen::Timetable => ScreenRule::owned(InstitutionAdmin, Placeholder),
        Screen::Reports => ScreenRule::owned(InstitutionAdmin, Placeholder),

        Screen::Gradebook => ScreenRule::owned(Teacher, Placeholder),
        Screen::Attendance => ScreenRule::owned(Teacher, Placeholder),
        Screen::Assignments => ScreenRule::owned(Teacher, Placeholder),
        Screen::LessonPlans => ScreenRule::owned(Teacher, Placeholder),
        Screen::MyClasses => ScreenRule::owned(Teacher, ToDashboard),

        Screen::MyCourses => ScreenRule::owned(Student, Placeholder),
        Screen::Grades => ScreenRule::owned(Student, Placeholder),
        Screen::Homework => ScreenRule::owned(Student, Placeholder),
        Screen::Schedule => ScreenRule::owned(Student, Placeholder),

        Screen::Children => ScreenRule::owned(Parent, ToDashboard),
        Screen::FeePayments => ScreenRule::owned(Parent, Placeholder),
        Screen::ProgressReports => ScreenRule::owned(Parent, Placeholder),
    }
}

/// Owning role of a screen, if it has exactly one.
pub fn owner(screen: Screen) -> Option<Role> {
    rule(screen).owner()
}

/// Screens reserved for `role`, in registry order.
pub fn owned_by(role: Role) -> Vec<Screen> {
    Screen::ALL
        .iter()
        .copied()
        .filter(|screen| owner(*screen) == Some(role))
        .collect()
}

/// The four screens reachable without signing in.
pub const PUBLIC_SCREENS: [Screen; 4] = [
    Screen::Onboarding,
    Screen::OnboardingLanding,
    Screen::TeacherOnboarding,
    Screen::StudentOnboarding,
];

pub fn is_public(screen: Screen) -> bool {
    PUBLIC_SCREENS.contains(&screen)
}
