//! Theme selection for the customize panel.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode (also the fallback for unknown values).
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Theme options in the order the selector renders them.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Light, Self::Dark]
    }

    /// Value carried by the theme control and the stored record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human label for the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Only the literal `"dark"` selects the dark theme.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// Resolves an optional stored value; absence means light.
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Self {
        value.map_or(Self::Light, Self::from_value)
    }

    /// Whether the body should carry the dark-mode class.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn only_literal_dark_is_dark() {
        assert_eq!(ThemeMode::from_value("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_value("Dark"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_value("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_value(""), ThemeMode::Light);
        assert_eq!(ThemeMode::from_optional(None), ThemeMode::Light);
        assert!(ThemeMode::from_optional(Some("dark")).is_dark());
    }
}
