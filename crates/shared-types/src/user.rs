use serde::{Deserialize, Serialize};

/// Profile details captured at sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserData {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub institution: Option<String>,
}

impl UserData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    /// Up to two uppercase initials for the avatar bubble.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Name to greet the user with, or a generic fallback.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Guest"
        } else {
            trimmed
        }
    }
}
