//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sevenguis_core::editor::{EditorConfig, INITIAL_RADIUS};
use sevenguis_core::input::Duration;
use sevenguis_core::{CLICK_DEBOUNCE_MS, DEFAULT_RADIUS};
use std::path::Path;

/// Settings for a script run. Every field is optional in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Radius of newly created circles.
    pub default_radius: f64,
    /// Radius control value before the first selection.
    pub initial_radius: f64,
    /// Minimum gap between accepted clicks, in milliseconds.
    pub debounce_ms: u64,
    /// Pretty-print the final snapshot.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            initial_radius: INITIAL_RADIUS,
            debounce_ms: CLICK_DEBOUNCE_MS,
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Editor settings derived from this config.
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            default_radius: self.default_radius,
            initial_radius: self.initial_radius,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "debounce_ms": 50 }"#).unwrap();
        assert_eq!(config.debounce_ms, 50);
        assert!((config.default_radius - 10.0).abs() < f64::EPSILON);
        assert!(config.pretty);
    }

    #[test]
    fn test_editor_config() {
        let config = AppConfig {
            default_radius: 5.0,
            ..AppConfig::default()
        };
        let editor = config.editor_config();
        assert!((editor.default_radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(editor.debounce, Duration::from_millis(20));
    }
}
