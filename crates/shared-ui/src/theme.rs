use dioxus::prelude::*;

/// Colour schemes offered in Settings.
///
/// Classic has both modes. Midnight is dark-only and Meadow is light-only,
/// so they resolve to their single mode whatever `is_dark` says.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Classic,
    Midnight,
    Meadow,
}

pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Classic,
    ThemeFamily::Midnight,
    ThemeFamily::Meadow,
];

impl ThemeFamily {
    /// Key used in the cookie and in `config.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Classic => "classic",
            ThemeFamily::Midnight => "midnight",
            ThemeFamily::Meadow => "meadow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Classic => "Classic",
            ThemeFamily::Midnight => "Midnight",
            ThemeFamily::Meadow => "Meadow",
        }
    }

    /// Parse a family key, falling back to Classic.
    pub fn from_key(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "midnight" => ThemeFamily::Midnight,
            "meadow" => ThemeFamily::Meadow,
            _ => ThemeFamily::Classic,
        }
    }

    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Meadow)
    }

    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Midnight)
    }

    /// Value for the `data-theme` attribute on `<html>`.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Classic, false) => "classic",
            (ThemeFamily::Classic, true) => "classic-dark",
            (ThemeFamily::Midnight, _) => "midnight",
            (ThemeFamily::Meadow, _) => "meadow",
        }
    }
}

/// Theme signals shared by the sidebar toggle and the Settings picker.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn family(&self) -> ThemeFamily {
        ThemeFamily::from_key(&self.family.read())
    }

    /// Apply the current family and mode to the document.
    pub fn apply(&self) {
        let theme = self.family().resolve(*self.is_dark.read());
        tracing::debug!(theme, "applying theme");
        set_theme(theme);
    }
}

/// Applies the theme stored in the cookie, or `fallback` when there is none.
///
/// Mount once near the root of the app.
#[component]
pub fn ThemeSeed(#[props(default = "classic".to_string())] fallback: String) -> Element {
    use_effect(move || {
        let fallback = ThemeFamily::from_key(&fallback).resolve(false);
        document::eval(&format!(
            r#"
            (function() {{
                var match = document.cookie.match(/(?:^|;\s*)campusly_theme=([^;]*)/);
                var theme = match ? match[1] : '{fallback}';
                document.documentElement.setAttribute('data-theme', theme);
            }})();
            "#,
        ));
    });

    rsx! {}
}

/// Persist `theme` in a cookie for a year and set it on the document root.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        document.cookie = 'campusly_theme={theme};path=/;max-age=31536000;SameSite=Lax';
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_classic() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Classic);
    }

    #[test]
    fn keys_parse_back() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
        assert_eq!(ThemeFamily::from_key(" Midnight "), ThemeFamily::Midnight);
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(ThemeFamily::from_key("cyberpunk"), ThemeFamily::Classic);
        assert_eq!(ThemeFamily::from_key(""), ThemeFamily::Classic);
    }

    #[test]
    fn classic_has_both_modes() {
        assert_eq!(ThemeFamily::Classic.resolve(false), "classic");
        assert_eq!(ThemeFamily::Classic.resolve(true), "classic-dark");
        assert!(ThemeFamily::Classic.has_dark());
        assert!(ThemeFamily::Classic.has_light());
    }

    #[test]
    fn single_mode_families_ignore_toggle() {
        assert_eq!(ThemeFamily::Midnight.resolve(false), "midnight");
        assert_eq!(ThemeFamily::Midnight.resolve(true), "midnight");
        assert!(!ThemeFamily::Midnight.has_light());
        assert_eq!(ThemeFamily::Meadow.resolve(true), "meadow");
        assert!(!ThemeFamily::Meadow.has_dark());
    }
}
