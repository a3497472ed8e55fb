//! Colour scheme preference, persisted under [`ThemePreference::STORAGE_KEY`].

/// `System` follows the OS `prefers-color-scheme` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub const STORAGE_KEY: &'static str = "portfolio-theme";

    /// Next preference for a single cycling toggle button.
    pub fn next(self) -> Self {
        match self {
            ThemePreference::System => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
        }
    }

    /// Value written to storage; `None` clears the key.
    pub fn as_storage(&self) -> Option<&'static str> {
        match self {
            ThemePreference::System => None,
            ThemePreference::Light => Some("light"),
            ThemePreference::Dark => Some("dark"),
        }
    }

    /// Unknown values fall back to `System`.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::System => "System theme",
            ThemePreference::Light => "Light theme",
            ThemePreference::Dark => "Dark theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let start = ThemePreference::System;
        assert_eq!(start.next(), ThemePreference::Light);
        assert_eq!(start.next().next(), ThemePreference::Dark);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_storage_roundtrip() {
        for pref in [
            ThemePreference::System,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            assert_eq!(ThemePreference::from_storage(pref.as_storage()), pref);
        }
        assert_eq!(
            ThemePreference::from_storage(Some("sepia")),
            ThemePreference::System
        );
    }
}
