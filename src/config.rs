//! Drag subsystem configuration
//!
//! Stored in `~/.config/harmoniq/drag.yaml`. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::guard::{default_selectors, Selector};

/// Tunables for panel dragging and reordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Pixels of a panel that must stay on screen along each axis
    #[serde(default = "default_min_visible")]
    pub min_visible: f64,

    /// z-index a dragged panel is raised to (at least)
    #[serde(default = "default_front_z_index")]
    pub front_z_index: i32,

    /// z-index given to newly registered panels
    #[serde(default = "default_z_index")]
    pub default_z_index: i32,

    /// How long notifications stay visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// Revert the in-memory order when persisting a reorder fails
    #[serde(default)]
    pub rollback_on_failure: bool,

    /// Elements that swallow presses instead of starting a drag
    #[serde(default = "default_selectors")]
    pub interactive_selectors: Vec<Selector>,
}

fn default_min_visible() -> f64 {
    50.0
}

fn default_front_z_index() -> i32 {
    1000
}

fn default_z_index() -> i32 {
    100
}

fn default_notification_ms() -> u64 {
    3000
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            min_visible: default_min_visible(),
            front_z_index: default_front_z_index(),
            default_z_index: default_z_index(),
            notification_ms: default_notification_ms(),
            rollback_on_failure: false,
            interactive_selectors: default_selectors(),
        }
    }
}

impl DragConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DragConfig::default();
        assert_eq!(config.min_visible, 50.0);
        assert_eq!(config.front_z_index, 1000);
        assert_eq!(config.default_z_index, 100);
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
        assert!(!config.rollback_on_failure);
        assert_eq!(config.interactive_selectors.len(), 11);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: DragConfig =
            serde_yaml::from_str("rollback_on_failure: true\nmin_visible: 80\n").unwrap();
        assert!(config.rollback_on_failure);
        assert_eq!(config.min_visible, 80.0);
        assert_eq!(config.front_z_index, 1000);
    }

    #[test]
    fn test_selectors_parse_from_yaml() {
        let config: DragConfig =
            serde_yaml::from_str("interactive_selectors: [button, .grip, '[data-no-drag]']\n")
                .unwrap();
        assert_eq!(
            config.interactive_selectors,
            vec![
                Selector::Tag("button".into()),
                Selector::Class("grip".into()),
                Selector::Attribute("data-no-drag".into()),
            ]
        );
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let result: Result<DragConfig, _> =
            serde_yaml::from_str("interactive_selectors: ['[broken']\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("drag.yaml");

        let config = DragConfig {
            rollback_on_failure: true,
            notification_ms: 500,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = DragConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = DragConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.starts_with("Failed to read config"));
    }
}
