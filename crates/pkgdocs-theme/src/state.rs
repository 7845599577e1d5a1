//! The two-valued theme selection.

use std::fmt;
use std::str::FromStr;

/// Visual theme of the documentation site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// Theme selected by a dark-mode switch.
    #[must_use]
    pub fn from_dark(use_dark: bool) -> Self {
        if use_dark { Self::Dark } else { Self::Light }
    }

    /// Literal persisted for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Page class for this theme: `dark_class` in dark mode, empty otherwise.
    #[must_use]
    pub fn class_name(self, dark_class: &str) -> &str {
        match self {
            Self::Light => "",
            Self::Dark => dark_class,
        }
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names neither theme.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeState {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeState::default(), ThemeState::Light);
    }

    #[test]
    fn test_from_dark() {
        assert_eq!(ThemeState::from_dark(true), ThemeState::Dark);
        assert_eq!(ThemeState::from_dark(false), ThemeState::Light);
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!("dark".parse(), Ok(ThemeState::Dark));
        assert_eq!("light".parse(), Ok(ThemeState::Light));
        assert_eq!(
            "Dark".parse::<ThemeState>(),
            Err(UnknownTheme("Dark".to_owned()))
        );
    }

    #[test]
    fn test_class_name() {
        assert_eq!(ThemeState::Dark.class_name("bp-dark"), "bp-dark");
        assert_eq!(ThemeState::Light.class_name("bp-dark"), "");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemeState::Light.toggled(), ThemeState::Dark);
        assert_eq!(ThemeState::Dark.toggled(), ThemeState::Light);
    }
}
