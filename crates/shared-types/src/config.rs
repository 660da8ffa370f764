use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Optional behaviours of the shell.
///
/// Every field has a default so a missing or incomplete config file still
/// yields a working app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Login screen offers one-click sign-in for each role.
    #[serde(default = "default_true")]
    pub demo_roles: bool,
    /// Login screen links to the onboarding flows.
    #[serde(default = "default_true")]
    pub onboarding: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_roles: true,
            onboarding: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Branding and presentation settings for the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            institution: None,
            default_theme: default_theme(),
        }
    }
}

fn default_app_name() -> String {
    "Campusly".to_string()
}

fn default_theme() -> String {
    "classic".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse `contents`, logging and falling back to defaults on error.
    pub fn from_toml_or_default(contents: &str) -> Self {
        match Self::from_toml(contents) {
            Ok(config) => {
                tracing::debug!(?config, "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "config unreadable, using defaults");
                Self::default()
            }
        }
    }
}
