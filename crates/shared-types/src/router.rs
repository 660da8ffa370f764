use serde::{Deserialize, Serialize};

use crate::policy::{self, Access, Fallback};
use crate::role::Role;
use crate::screen::{Screen, ScreenKey};

/// One concrete dashboard component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardKind {
    SuperAdmin,
    InstitutionAdmin,
    Teacher,
    StudentDesktop,
    StudentMobile,
    ParentDesktop,
    ParentMobile,
}

impl DashboardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardKind::SuperAdmin => "super_admin",
            DashboardKind::InstitutionAdmin => "institution_admin",
            DashboardKind::Teacher => "teacher",
            DashboardKind::StudentDesktop => "student_desktop",
            DashboardKind::StudentMobile => "student_mobile",
            DashboardKind::ParentDesktop => "parent_desktop",
            DashboardKind::ParentMobile => "parent_mobile",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DashboardKind::StudentMobile | DashboardKind::ParentMobile)
    }
}

/// The dashboard a role lands on.
///
/// Roles with a mobile layout carry both variants; the shell renders both
/// and the stylesheet decides which one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashboardView {
    pub role: Role,
    pub desktop: DashboardKind,
    pub mobile: Option<DashboardKind>,
}

impl DashboardView {
    pub fn for_role(role: Role) -> Self {
        let (desktop, mobile) = match role {
            Role::SuperAdmin => (DashboardKind::SuperAdmin, None),
            Role::InstitutionAdmin => (DashboardKind::InstitutionAdmin, None),
            Role::Teacher => (DashboardKind::Teacher, None),
            Role::Student => (DashboardKind::StudentDesktop, Some(DashboardKind::StudentMobile)),
            Role::Parent => (DashboardKind::ParentDesktop, Some(DashboardKind::ParentMobile)),
        };
        Self {
            role,
            desktop,
            mobile,
        }
    }

    /// Every dashboard component this view mounts.
    pub fn variants(&self) -> Vec<DashboardKind> {
        std::iter::once(self.desktop).chain(self.mobile).collect()
    }
}

/// What the content area renders. Exactly one per resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "view")]
pub enum View {
    Login,
    /// One of the onboarding screens reachable before sign-in.
    Public { screen: Screen },
    Dashboard(DashboardView),
    /// The screen's dedicated component.
    Screen { screen: Screen },
    /// "Not available for your role" stand-in.
    Placeholder { feature: Screen, role: Role },
}

impl View {
    /// The screen whose dedicated component is mounted, if any.
    pub fn dedicated_screen(&self) -> Option<Screen> {
        match self {
            View::Public { screen } | View::Screen { screen } => Some(*screen),
            _ => None,
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, View::Dashboard(_))
    }

    /// Header title for this view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => Screen::Login.title(),
            View::Public { screen } | View::Screen { screen } => screen.title(),
            View::Dashboard(_) => Screen::Dashboard.title(),
            View::Placeholder { feature, .. } => feature.title(),
        }
    }
}

/// Decide what to render for a screen request.
///
/// Total and pure: every input maps to exactly one [`View`], and nothing is
/// mutated. Requests the role is not entitled to are masked here rather
/// than rejected when the session stores them.
pub fn resolve(requested: &ScreenKey, role: Role, is_authenticated: bool) -> View {
    let view = if is_authenticated {
        resolve_signed_in(requested, role)
    } else {
        resolve_signed_out(requested)
    };
    tracing::trace!(screen = %requested, %role, is_authenticated, ?view, "resolved view");
    view
}

fn resolve_signed_out(requested: &ScreenKey) -> View {
    match requested.screen() {
        Some(screen) if policy::is_public(screen) => View::Public { screen },
        _ => View::Login,
    }
}

fn resolve_signed_in(requested: &ScreenKey, role: Role) -> View {
    let dashboard = View::Dashboard(DashboardView::for_role(role));

    let Some(screen) = requested.screen() else {
        return dashboard;
    };

    let rule = policy::rule(screen);
    match rule.access {
        Access::Public | Access::Dashboard => dashboard,
        Access::AnyRole => View::Screen { screen },
        Access::Owner(owner) if owner == role => View::Screen { screen },
        Access::Owner(_) => match rule.fallback {
            Fallback::Dashboard => dashboard,
            Fallback::Placeholder => View::Placeholder {
                feature: screen,
                role,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> ScreenKey {
        ScreenKey::parse(s)
    }

    #[test]
    fn signed_out_whitelist() {
        assert_eq!(
            resolve(&key("teacher-onboarding"), Role::Teacher, false),
            View::Public {
                screen: Screen::TeacherOnboarding
            }
        );
        assert_eq!(resolve(&key("gradebook"), Role::Teacher, false), View::Login);
        assert_eq!(resolve(&key("login"), Role::Parent, false), View::Login);
        assert_eq!(resolve(&key("%%%"), Role::Parent, false), View::Login);
    }

    #[test]
    fn owner_gets_dedicated_screen() {
        assert_eq!(
            resolve(&key("gradebook"), Role::Teacher, true),
            View::Screen {
                screen: Screen::Gradebook
            }
        );
    }

    #[test]
    fn placeholder_fallback_carries_feature_and_role() {
        assert_eq!(
            resolve(&key("gradebook"), Role::Student, true),
            View::Placeholder {
                feature: Screen::Gradebook,
                role: Role::Student
            }
        );
    }

    #[test]
    fn dashboard_fallback_uses_requesting_role() {
        assert_eq!(
            resolve(&key("students"), Role::Parent, true),
            View::Dashboard(DashboardView::for_role(Role::Parent))
        );
    }

    #[test]
    fn unrecognized_and_public_screens_fall_back_to_dashboard() {
        let expected = View::Dashboard(DashboardView::for_role(Role::Teacher));
        assert_eq!(resolve(&key("does-not-exist"), Role::Teacher, true), expected);
        assert_eq!(resolve(&key("login"), Role::Teacher, true), expected);
        assert_eq!(resolve(&key("onboarding"), Role::Teacher, true), expected);
    }

    #[test]
    fn shared_screens_render_for_everyone() {
        for role in Role::ALL {
            assert_eq!(
                resolve(&key("settings"), role, true).dedicated_screen(),
                Some(Screen::Settings)
            );
        }
    }

    #[test]
    fn dashboard_variants() {
        assert_eq!(
            DashboardView::for_role(Role::Student).variants(),
            vec![DashboardKind::StudentDesktop, DashboardKind::StudentMobile]
        );
        assert_eq!(
            DashboardView::for_role(Role::InstitutionAdmin).variants(),
            vec![DashboardKind::InstitutionAdmin]
        );
    }

    #[test]
    fn view_titles() {
        assert_eq!(View::Login.title(), "Sign In");
        assert_eq!(
            resolve(&key("fee-payments"), Role::Teacher, true).title(),
            "Fee Payments"
        );
    }
}
