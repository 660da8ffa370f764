use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Every screen the shell knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    // Public
    Login,
    Onboarding,
    OnboardingLanding,
    TeacherOnboarding,
    StudentOnboarding,
    // Every role
    Dashboard,
    Settings,
    Profile,
    Notifications,
    Messages,
    // Super admin
    Institutions,
    MasterData,
    Subscriptions,
    PlatformAnalytics,
    // Institution admin
    Students,
    Teachers,
    Classes,
    Admissions,
    FeeManagement,
    Timetable,
    Reports,
    // Teacher
    Gradebook,
    Attendance,
    Assignments,
    LessonPlans,
    MyClasses,
    // Student
    MyCourses,
    Grades,
    Homework,
    Schedule,
    // Parent
    Children,
    FeePayments,
    ProgressReports,
}

impl Screen {
    /// The full registry in declaration order.
    pub const ALL: [Screen; 33] = [
        Screen::Login,
        Screen::Onboarding,
        Screen::OnboardingLanding,
        Screen::TeacherOnboarding,
        Screen::StudentOnboarding,
        Screen::Dashboard,
        Screen::Settings,
        Screen::Profile,
        Screen::Notifications,
        Screen::Messages,
        Screen::Institutions,
        Screen::MasterData,
        Screen::Subscriptions,
        Screen::PlatformAnalytics,
        Screen::Students,
        Screen::Teachers,
        Screen::Classes,
        Screen::Admissions,
        Screen::FeeManagement,
        Screen::Timetable,
        Screen::Reports,
        Screen::Gradebook,
        Screen::Attendance,
        Screen::Assignments,
        Screen::LessonPlans,
        Screen::MyClasses,
        Screen::MyCourses,
        Screen::Grades,
        Screen::Homework,
        Screen::Schedule,
        Screen::Children,
        Screen::FeePayments,
        Screen::ProgressReports,
    ];

    /// Kebab-case identifier used by navigation callbacks.
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Onboarding => "onboarding",
            Screen::OnboardingLanding => "onboarding-landing",
            Screen::TeacherOnboarding => "teacher-onboarding",
            Screen::StudentOnboarding => "student-onboarding",
            Screen::Dashboard => "dashboard",
            Screen::Settings => "settings",
            Screen::Profile => "profile",
            Screen::Notifications => "notifications",
            Screen::Messages => "messages",
            Screen::Institutions => "institutions",
            Screen::MasterData => "master-data",
            Screen::Subscriptions => "subscriptions",
            Screen::PlatformAnalytics => "platform-analytics",
            Screen::Students => "students",
            Screen::Teachers => "teachers",
            Screen::Classes => "classes",
            Screen::Admissions => "admissions",
            Screen::FeeManagement => "fee-management",
            Screen::Timetable => "timetable",
            Screen::Reports => "reports",
            Screen::Gradebook => "gradebook",
            Screen::Attendance => "attendance",
            Screen::Assignments => "assignments",
            Screen::LessonPlans => "lesson-plans",
            Screen::MyClasses => "my-classes",
            Screen::MyCourses => "my-courses",
            Screen::Grades => "grades",
            Screen::Homework => "homework",
            Screen::Schedule => "schedule",
            Screen::Children => "children",
            Screen::FeePayments => "fee-payments",
            Screen::ProgressReports => "progress-reports",
        }
    }

    /// Look up a screen by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Screen::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Page title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Onboarding => "Get Started",
            Screen::OnboardingLanding => "Welcome",
            Screen::TeacherOnboarding => "Teacher Onboarding",
            Screen::StudentOnboarding => "Student Onboarding",
            Screen::Dashboard => "Dashboard",
            Screen::Settings => "Settings",
            Screen::Profile => "Profile",
            Screen::Notifications => "Notifications",
            Screen::Messages => "Messages",
            Screen::Institutions => "Institutions",
            Screen::MasterData => "Master Data",
            Screen::Subscriptions => "Subscriptions",
            Screen::PlatformAnalytics => "Platform Analytics",
            Screen::Students => "Students",
            Screen::Teachers => "Teachers",
            Screen::Classes => "Classes & Sections",
            Screen::Admissions => "Admissions",
            Screen::FeeManagement => "Fee Management",
            Screen::Timetable => "Timetable",
            Screen::Reports => "Reports",
            Screen::Gradebook => "Gradebook",
            Screen::Attendance => "Attendance",
            Screen::Assignments => "Assignments",
            Screen::LessonPlans => "Lesson Plans",
            Screen::MyClasses => "My Classes",
            Screen::MyCourses => "My Courses",
            Screen::Grades => "Grades",
            Screen::Homework => "Homework",
            Screen::Schedule => "Schedule",
            Screen::Children => "My Children",
            Screen::FeePayments => "Fee Payments",
            Screen::ProgressReports => "Progress Reports",
        }
    }

    /// One-line summary used under page titles and in placeholders.
    pub fn description(&self) -> &'static str {
        match self {
            Screen::Login => "Sign in to your school workspace.",
            Screen::Onboarding => "Set up a new institution on the platform.",
            Screen::OnboardingLanding => "Choose how you would like to join.",
            Screen::TeacherOnboarding => "Create your teacher profile and join your school.",
            Screen::StudentOnboarding => "Enrol with the code your school sent you.",
            Screen::Dashboard => "Your overview for today.",
            Screen::Settings => "Preferences for your account and workspace.",
            Screen::Profile => "Your personal details.",
            Screen::Notifications => "Announcements and alerts addressed to you.",
            Screen::Messages => "Conversations with staff, students and families.",
            Screen::Institutions => "Schools and colleges registered on the platform.",
            Screen::MasterData => "Boards, grades, subjects and other shared lookups.",
            Screen::Subscriptions => "Plans and renewals for each institution.",
            Screen::PlatformAnalytics => "Usage across every tenant.",
            Screen::Students => "Enrolled students and their records.",
            Screen::Teachers => "Teaching staff and their assignments.",
            Screen::Classes => "Grades, sections and class teachers.",
            Screen::Admissions => "Applications for the coming term.",
            Screen::FeeManagement => "Fee structures, invoices and collections.",
            Screen::Timetable => "Weekly periods for every section.",
            Screen::Reports => "Academic and administrative reports.",
            Screen::Gradebook => "Marks for every assessment you teach.",
            Screen::Attendance => "Daily attendance for your sections.",
            Screen::Assignments => "Work you have set and its submissions.",
            Screen::LessonPlans => "Plans for upcoming lessons.",
            Screen::MyClasses => "Sections you teach this term.",
            Screen::MyCourses => "Subjects you are enrolled in.",
            Screen::Grades => "Your results by subject.",
            Screen::Homework => "Work due from your teachers.",
            Screen::Schedule => "Your week at a glance.",
            Screen::Children => "Your children enrolled at the school.",
            Screen::FeePayments => "Invoices and payment history.",
            Screen::ProgressReports => "Term reports from class teachers.",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Screen {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::from_key(s).ok_or_else(|| AppError::unknown_screen(s))
    }
}

impl Serialize for Screen {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Screen {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// A screen request as it arrives from a navigation callback.
///
/// Callbacks pass plain strings, so a request may name a screen that does
/// not exist. Parsing never fails; the router decides what to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScreenKey {
    Known(Screen),
    Unrecognized(String),
}

impl ScreenKey {
    pub fn parse(key: &str) -> Self {
        match Screen::from_key(key) {
            Some(screen) => ScreenKey::Known(screen),
            None => ScreenKey::Unrecognized(key.to_string()),
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        match self {
            ScreenKey::Known(screen) => Some(*screen),
            ScreenKey::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScreenKey::Known(screen) => screen.key(),
            ScreenKey::Unrecognized(raw) => raw,
        }
    }
}

impl Default for ScreenKey {
    fn default() -> Self {
        ScreenKey::Known(Screen::Login)
    }
}

impl From<Screen> for ScreenKey {
    fn from(screen: Screen) -> Self {
        ScreenKey::Known(screen)
    }
}

impl From<&str> for ScreenKey {
    fn from(key: &str) -> Self {
        ScreenKey::parse(key)
    }
}

impl From<String> for ScreenKey {
    fn from(key: String) -> Self {
        match Screen::from_key(&key) {
            Some(screen) => ScreenKey::Known(screen),
            None => ScreenKey::Unrecognized(key),
        }
    }
}

impl From<ScreenKey> for String {
    fn from(key: ScreenKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = Screen::ALL.iter().map(Screen::key).collect();
        assert_eq!(keys.len(), Screen::ALL.len());
    }

    #[test]
    fn key_roundtrip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
        }
    }

    #[test]
    fn unknown_key_is_unrecognized() {
        assert_eq!(
            ScreenKey::parse("quantum-physics"),
            ScreenKey::Unrecognized("quantum-physics".to_string())
        );
        assert_eq!(ScreenKey::parse("").screen(), None);
        assert!("Gradebook".parse::<Screen>().is_err());
    }

    #[test]
    fn screen_key_defaults_to_login() {
        assert_eq!(ScreenKey::default(), ScreenKey::Known(Screen::Login));
    }

    #[test]
    fn screen_key_serializes_as_plain_string() {
        let json = serde_json::to_string(&ScreenKey::from(Screen::MasterData)).unwrap();
        assert_eq!(json, "\"master-data\"");
        let parsed: ScreenKey = serde_json::from_str("\"lost\"").unwrap();
        assert_eq!(parsed, ScreenKey::Unrecognized("lost".to_string()));
    }

    #[test]
    fn every_screen_has_title_and_description() {
        for screen in Screen::ALL {
            assert!(!screen.title().is_empty(), "{screen} has no title");
            assert!(!screen.description().is_empty(), "{screen} has no description");
        }
    }
}
