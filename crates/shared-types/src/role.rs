use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::policy;
use crate::screen::Screen;

/// The perspective a signed-in user works from.
///
/// Fixed for the lifetime of a session; chosen at login.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    SuperAdmin,
    InstitutionAdmin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    /// Every role in sign-in order.
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::InstitutionAdmin,
        Role::Teacher,
        Role::Student,
        Role::Parent,
    ];

    /// Lowercase key used in config and serialized session snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::InstitutionAdmin => "institution_admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }

    /// Human-readable name for badges and headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::InstitutionAdmin => "Institution Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
        }
    }

    /// Parse a role key. Unknown values fall back to the default role.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Student and parent use the app on phones as well as desktops.
    pub fn has_mobile_layout(&self) -> bool {
        matches!(self, Role::Student | Role::Parent)
    }

    /// Screens this role may open without being redirected, in registry order.
    pub fn allowed_screens(&self) -> Vec<Screen> {
        Screen::ALL
            .iter()
            .copied()
            .filter(|screen| policy::rule(*screen).admits(*self))
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "super_admin" => Ok(Role::SuperAdmin),
            "institution_admin" => Ok(Role::InstitutionAdmin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            "parent" => Ok(Role::Parent),
            _ => Err(AppError::unknown_role(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn as_str_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn parse_accepts_kebab_and_case_variants() {
        assert_eq!("Institution-Admin".parse::<Role>().unwrap(), Role::InstitutionAdmin);
        assert_eq!(" TEACHER ".parse::<Role>().unwrap(), Role::Teacher);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "principal".parse::<Role>().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::UnknownRole);
        assert_eq!(Role::from_str_or_default("principal"), Role::SuperAdmin);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::InstitutionAdmin).unwrap();
        assert_eq!(json, "\"institution_admin\"");
        let parsed: Role = serde_json::from_str("\"parent\"").unwrap();
        assert_eq!(parsed, Role::Parent);
    }

    #[test]
    fn only_student_and_parent_have_mobile_layout() {
        let mobile: Vec<Role> = Role::ALL
            .into_iter()
            .filter(Role::has_mobile_layout)
            .collect();
        assert_eq!(mobile, vec![Role::Student, Role::Parent]);
    }

    #[test]
    fn allowed_screens_include_shared_and_owned() {
        let screens = Role::Teacher.allowed_screens();
        assert!(screens.contains(&Screen::Dashboard));
        assert!(screens.contains(&Screen::Gradebook));
        assert!(screens.contains(&Screen::Settings));
        assert!(!screens.contains(&Screen::Students));
        assert!(!screens.contains(&Screen::Login));
    }
}
