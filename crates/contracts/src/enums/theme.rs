use serde::{Deserialize, Serialize};

/// Colour scheme of the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two known names is
    /// treated as absent.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Startup policy: stored value first, then the system dark-mode
    /// preference, then light.
    pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Theme::from_code) {
            return theme;
        }
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins() {
        assert_eq!(Theme::resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_falls_back_to_system_preference() {
        assert_eq!(Theme::resolve_initial(None, true), Theme::Dark);
        assert_eq!(Theme::resolve_initial(Some("forest"), true), Theme::Dark);
        assert_eq!(Theme::resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_code(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_code("Dark"), None);
    }
}
