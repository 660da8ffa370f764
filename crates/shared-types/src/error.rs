use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
///
/// Only parsing edges can fail; navigation and session transitions are
/// infallible and never produce one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    UnknownRole,
    UnknownScreen,
    InvalidConfig,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::UnknownRole => write!(f, "UnknownRole"),
            AppErrorKind::UnknownScreen => write!(f, "UnknownScreen"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error shared by the types crate and the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn unknown_role(value: &str) -> Self {
        Self {
            kind: AppErrorKind::UnknownRole,
            message: format!("'{value}' is not a recognised role"),
        }
    }

    pub fn unknown_screen(value: &str) -> Self {
        Self {
            kind: AppErrorKind::UnknownScreen,
            message: format!("'{value}' is not a registered screen"),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.message().to_string())
    }
}
