//! Per-role navigation menus: the sidebar on desktop and the bottom tab bar
//! on phones.

use crate::role::Role;
use crate::router::View;
use crate::screen::Screen;

/// Icon identifiers. The app maps each to a concrete icon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    Dashboard,
    Building,
    Database,
    CreditCard,
    Chart,
    Users,
    Teacher,
    Layers,
    ClipboardList,
    Wallet,
    Calendar,
    FileText,
    BookOpen,
    CheckSquare,
    Award,
    Notebook,
    Heart,
    Bell,
    Message,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub screen: Screen,
    pub label: &'static str,
    pub icon: MenuIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub label: &'static str,
    pub items: &'static [MenuItem],
}

impl MenuItem {
    /// Whether this entry should be highlighted while `view` is shown.
    pub fn is_active(&self, view: &View) -> bool {
        match self.screen {
            Screen::Dashboard => view.is_dashboard(),
            screen => view.dedicated_screen() == Some(screen),
        }
    }
}

const fn item(screen: Screen, label: &'static str, icon: MenuIcon) -> MenuItem {
    MenuItem {
        screen,
        label,
        icon,
    }
}

const OVERVIEW: MenuItem = item(Screen::Dashboard, "Dashboard", MenuIcon::Dashboard);

const ACCOUNT: MenuSection = MenuSection {
    label: "Account",
    items: &[
        item(Screen::Notifications, "Notifications", MenuIcon::Bell),
        item(Screen::Messages, "Messages", MenuIcon::Message),
        item(Screen::Settings, "Settings", MenuIcon::Settings),
    ],
};

const SUPER_ADMIN: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[OVERVIEW],
    },
    MenuSection {
        label: "Platform",
        items: &[
            item(Screen::Institutions, "Institutions", MenuIcon::Building),
            item(Screen::MasterData, "Master Data", MenuIcon::Database),
            item(Screen::Subscriptions, "Subscriptions", MenuIcon::CreditCard),
            item(Screen::PlatformAnalytics, "Analytics", MenuIcon::Chart),
        ],
    },
    ACCOUNT,
];

const INSTITUTION_ADMIN: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[OVERVIEW],
    },
    MenuSection {
        label: "People",
        items: &[
            item(Screen::Students, "Students", MenuIcon::Users),
            item(Screen::Teachers, "Teachers", MenuIcon::Teacher),
            item(Screen::Admissions, "Admissions", MenuIcon::ClipboardList),
        ],
    },
    MenuSection {
        label: "Academics",
        items: &[
            item(Screen::Classes, "Classes", MenuIcon::Layers),
            item(Screen::Timetable, "Timetable", MenuIcon::Calendar),
            item(Screen::Reports, "Reports", MenuIcon::FileText),
        ],
    },
    MenuSection {
        label: "Finance",
        items: &[item(Screen::FeeManagement, "Fees", MenuIcon::Wallet)],
    },
    ACCOUNT,
];

const TEACHER: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[OVERVIEW, item(Screen::MyClasses, "My Classes", MenuIcon::Layers)],
    },
    MenuSection {
        label: "Teaching",
        items: &[
            item(Screen::Attendance, "Attendance", MenuIcon::CheckSquare),
            item(Screen::Gradebook, "Gradebook", MenuIcon::Award),
            item(Screen::Assignments, "Assignments", MenuIcon::ClipboardList),
            item(Screen::LessonPlans, "Lesson Plans", MenuIcon::Notebook),
        ],
    },
    ACCOUNT,
];

const STUDENT: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[OVERVIEW],
    },
    MenuSection {
        label: "Learning",
        items: &[
            item(Screen::MyCourses, "My Courses", MenuIcon::BookOpen),
            item(Screen::Homework, "Homework", MenuIcon::ClipboardList),
            item(Screen::Grades, "Grades", MenuIcon::Award),
            item(Screen::Schedule, "Schedule", MenuIcon::Calendar),
        ],
    },
    ACCOUNT,
];

const PARENT: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[OVERVIEW, item(Screen::Children, "My Children", MenuIcon::Heart)],
    },
    MenuSection {
        label: "School",
        items: &[
            item(Screen::ProgressReports, "Progress Reports", MenuIcon::FileText),
            item(Screen::FeePayments, "Fee Payments", MenuIcon::Wallet),
        ],
    },
    ACCOUNT,
];

const STUDENT_TABS: &[MenuItem] = &[
    item(Screen::Dashboard, "Home", MenuIcon::Dashboard),
    item(Screen::MyCourses, "Courses", MenuIcon::BookOpen),
    item(Screen::Homework, "Homework", MenuIcon::ClipboardList),
    item(Screen::Grades, "Grades", MenuIcon::Award),
    item(Screen::Messages, "Inbox", MenuIcon::Message),
];

const PARENT_TABS: &[MenuItem] = &[
    item(Screen::Dashboard, "Home", MenuIcon::Dashboard),
    item(Screen::Children, "Children", MenuIcon::Heart),
    item(Screen::ProgressReports, "Reports", MenuIcon::FileText),
    item(Screen::FeePayments, "Fees", MenuIcon::Wallet),
    item(Screen::Messages, "Inbox", MenuIcon::Message),
];

/// Sidebar sections for a role, top to bottom.
pub fn sidebar_sections(role: Role) -> &'static [MenuSection] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::InstitutionAdmin => INSTITUTION_ADMIN,
        Role::Teacher => TEACHER,
        Role::Student => STUDENT,
        Role::Parent => PARENT,
    }
}

/// Bottom tab bar for roles with a mobile layout; empty otherwise.
pub fn bottom_tabs(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Student => STUDENT_TABS,
        Role::Parent => PARENT_TABS,
        _ => &[],
    }
}

/// Every sidebar entry for a role, flattened.
pub fn sidebar_items(role: Role) -> impl Iterator<Item = &'static MenuItem> {
    sidebar_sections(role)
        .iter()
        .flat_map(|section| section.items.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sidebar_starts_with_dashboard() {
        for role in Role::ALL {
            let first = sidebar_items(role).next().unwrap();
            assert_eq!(first.screen, Screen::Dashboard);
        }
    }

    #[test]
    fn tabs_only_for_mobile_roles() {
        for role in Role::ALL {
            assert_eq!(!bottom_tabs(role).is_empty(), role.has_mobile_layout());
        }
        assert!(bottom_tabs(Role::Student).len() <= 5);
        assert!(bottom_tabs(Role::Parent).len() <= 5);
    }

    #[test]
    fn sidebar_never_lists_public_screens() {
        for role in Role::ALL {
            assert!(sidebar_items(role).all(|i| !matches!(
                i.screen,
                Screen::Login
                    | Screen::Onboarding
                    | Screen::OnboardingLanding
                    | Screen::TeacherOnboarding
                    | Screen::StudentOnboarding
            )));
        }
    }

    #[test]
    fn active_entry_follows_view() {
        let dashboard = item(Screen::Dashboard, "Home", MenuIcon::Dashboard);
        let grades = item(Screen::Grades, "Grades", MenuIcon::Award);

        let on_dashboard = crate::router::resolve(&Screen::Dashboard.into(), Role::Student, true);
        assert!(dashboard.is_active(&on_dashboard));
        assert!(!grades.is_active(&on_dashboard));

        let on_grades = crate::router::resolve(&Screen::Grades.into(), Role::Student, true);
        assert!(grades.is_active(&on_grades));
        assert!(!dashboard.is_active(&on_grades));

        // A placeholder is not the feature's own screen.
        let masked = crate::router::resolve(&Screen::Grades.into(), Role::Teacher, true);
        assert!(!grades.is_active(&masked));
    }
}
