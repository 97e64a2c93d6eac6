//! Application State
//!
//! Window shell state persisted between runs: window bounds and theme mode.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{Bounds, Pixels};
use gpui_component::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::error;

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("hello-gui.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Theme mode override; absent means follow the system appearance
    theme: Option<String>,
    /// Last known window bounds
    bounds: Option<Bounds<Pixels>>,
}

impl AppState {
    /// Load state from the config file
    ///
    /// A missing or empty file yields the default state; a malformed file is
    /// an error (the caller decides whether to fall back to defaults).
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(state)
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }
}

/// Save app state to disk
pub fn save_app_state(state: &AppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};

    #[test]
    fn empty_config_parses_to_defaults() {
        let state: AppState = toml::from_str("").expect("empty config should parse");
        assert!(state.bounds().is_none());
        assert!(state.theme().is_none());
    }

    #[test]
    fn theme_mode_round_trip() {
        let mut state = AppState::default();

        state.set_theme(Some(ThemeMode::Dark));
        assert_eq!(state.theme(), Some(ThemeMode::Dark));

        state.set_theme(Some(ThemeMode::Light));
        assert_eq!(state.theme(), Some(ThemeMode::Light));

        state.set_theme(None);
        assert!(state.theme().is_none());
    }

    #[test]
    fn bounds_survive_serialization() {
        let mut state = AppState::default();
        state.set_bounds(Bounds {
            origin: point(px(10.0), px(20.0)),
            size: size(px(640.0), px(480.0)),
        });

        let value = toml::to_string(&state).expect("state should serialize");
        let loaded: AppState = toml::from_str(&value).expect("state should deserialize");
        assert_eq!(loaded.bounds(), state.bounds());
    }

    #[test]
    fn unknown_theme_string_maps_to_system() {
        let state: AppState =
            toml::from_str(r#"theme = "sepia""#).expect("config should parse");
        assert!(state.theme().is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(toml::from_str::<AppState>("theme = 42").is_err());
    }
}
