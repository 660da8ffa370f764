mod desktop;
mod mobile;

use dioxus::prelude::*;
use shared_types::{DashboardKind, DashboardView, Screen};
use shared_ui::Responsive;

use desktop::DesktopDashboard;
use mobile::MobileDashboard;

/// Role-adaptive dashboard. Roles with a phone layout mount both variants
/// and the stylesheet shows the one that fits.
#[component]
pub fn Dashboard(view: DashboardView) -> Element {
    match view.mobile {
        Some(mobile) => rsx! {
            Responsive {
                desktop: rsx! { DesktopDashboard { kind: view.desktop } },
                mobile: rsx! { MobileDashboard { kind: mobile } },
            }
        },
        None => rsx! { DesktopDashboard { kind: view.desktop } },
    }
}

/// Shortcuts shown on a dashboard, in display order.
fn quick_actions(kind: DashboardKind) -> &'static [(Screen, &'static str)] {
    match kind {
        DashboardKind::SuperAdmin => &[
            (Screen::Institutions, "Manage institutions"),
            (Screen::Subscriptions, "Review subscriptions"),
            (Screen::PlatformAnalytics, "Platform analytics"),
            (Screen::MasterData, "Master data"),
        ],
        DashboardKind::InstitutionAdmin => &[
            (Screen::Admissions, "Admissions"),
            (Screen::FeeManagement, "Fee collection"),
            (Screen::Timetable, "Timetable"),
            (Screen::Reports, "Reports"),
        ],
        DashboardKind::Teacher => &[
            (Screen::Attendance, "Take attendance"),
            (Screen::Gradebook, "Gradebook"),
            (Screen::Assignments, "Assignments"),
            (Screen::LessonPlans, "Lesson plans"),
        ],
        DashboardKind::StudentDesktop | DashboardKind::StudentMobile => &[
            (Screen::Homework, "Homework"),
            (Screen::Grades, "Grades"),
            (Screen::Schedule, "Schedule"),
            (Screen::MyCourses, "Courses"),
        ],
        DashboardKind::ParentDesktop | DashboardKind::ParentMobile => &[
            (Screen::Children, "My children"),
            (Screen::FeePayments, "Pay fees"),
            (Screen::ProgressReports, "Progress reports"),
            (Screen::Messages, "Message school"),
        ],
    }
}

/// The list previewed under "Needs attention".
fn focus_screen(kind: DashboardKind) -> Screen {
    match kind {
        DashboardKind::SuperAdmin => Screen::Institutions,
        DashboardKind::InstitutionAdmin => Screen::Admissions,
        DashboardKind::Teacher => Screen::Assignments,
        DashboardKind::StudentDesktop | DashboardKind::StudentMobile => Screen::Homework,
        DashboardKind::ParentDesktop | DashboardKind::ParentMobile => Screen::FeePayments,
    }
}
