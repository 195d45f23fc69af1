//! Light/dark theme selection.

use crate::error::CampusError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Value for the `theme-color` meta tag used by mobile browsers.
    pub fn meta_color(&self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1f2937",
        }
    }

    fn other(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = CampusError;

    /// Parse a saved preference, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CampusError::InvalidParam {
                field: "theme".to_string(),
                message: format!("unknown theme '{}'", other),
            }),
        }
    }
}

/// Theme state for one browser session.
///
/// A saved choice always wins; without one the system preference decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    saved: Option<Theme>,
    system_prefers_dark: bool,
}

impl ThemeState {
    pub fn new(saved: Option<Theme>, system_prefers_dark: bool) -> Self {
        Self {
            saved,
            system_prefers_dark,
        }
    }

    /// Theme currently in effect.
    pub fn current(&self) -> Theme {
        match self.saved {
            Some(theme) => theme,
            None if self.system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn saved(&self) -> Option<Theme> {
        self.saved
    }

    /// Explicitly choose a theme; the choice is remembered.
    pub fn set(&mut self, theme: Theme) {
        debug!("Theme set to {}", theme.as_str());
        self.saved = Some(theme);
    }

    /// Flip the theme and remember the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().other();
        self.set(next);
        next
    }

    /// React to the operating system switching its color scheme.
    ///
    /// Returns the new theme when the change is visible, i.e. when nothing is saved.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        self.system_prefers_dark = prefers_dark;
        match self.saved {
            Some(_) => None,
            None => Some(self.current()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme_resolution() {
        assert_eq!(ThemeState::new(None, false).current(), Theme::Light);
        assert_eq!(ThemeState::new(None, true).current(), Theme::Dark);
        assert_eq!(
            ThemeState::new(Some(Theme::Light), true).current(),
            Theme::Light
        );
    }

    #[test]
    fn test_toggle_saves_choice() {
        let mut state = ThemeState::new(None, true);
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.saved(), Some(Theme::Light));
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.current().meta_color(), "#1f2937");
    }

    #[test]
    fn test_system_change_only_applies_without_saved_choice() {
        let mut state = ThemeState::new(None, false);
        assert_eq!(state.system_changed(true), Some(Theme::Dark));

        state.set(Theme::Light);
        assert_eq!(state.system_changed(true), None);
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(CampusError::InvalidParam { .. })
        ));
    }
}
