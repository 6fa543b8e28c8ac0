// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[viewer]` - Toolset, zoom factor table, double-click policy, panel size
//! - `[export]` - Download destination settings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `IMAGE_PREVIEW_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_preview::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.export.ask_destination = true;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::ScaleTable;
use crate::ui::viewer::controller::ResetPolicy;
use crate::ui::viewer::toolbar::{Tool, ToolSet, DEFAULT_TOOLSET};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Viewer behaviour and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Enabled action bar entries. Order in the file does not matter.
    #[serde(default = "default_toolset")]
    pub toolset: Vec<Tool>,

    /// Custom zoom factor table. Must be ascending and contain 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_levels: Option<Vec<f32>>,

    /// What a double-click on the image resets.
    #[serde(default)]
    pub double_click_reset: ResetPolicy,

    /// Preview panel width.
    #[serde(default = "default_width")]
    pub width: f32,

    /// Preview panel height, action bar included.
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            toolset: default_toolset(),
            scale_levels: None,
            double_click_reset: ResetPolicy::default(),
            width: DEFAULT_VIEWER_WIDTH,
            height: DEFAULT_VIEWER_HEIGHT,
        }
    }
}

impl ViewerConfig {
    /// Builds the scale table, falling back to the default one when the
    /// configured levels are invalid. The second value explains the fallback.
    #[must_use]
    pub fn scale_table(&self) -> (ScaleTable, Option<String>) {
        match &self.scale_levels {
            None => (ScaleTable::default(), None),
            Some(levels) => match ScaleTable::new(levels.clone()) {
                Ok(table) => (table, None),
                Err(err) => {
                    tracing::warn!(%err, "ignoring configured scale levels");
                    (ScaleTable::default(), Some(err.to_string()))
                }
            },
        }
    }

    /// Returns the normalized toolset.
    #[must_use]
    pub fn tool_set(&self) -> ToolSet {
        ToolSet::from_tools(self.toolset.iter().copied())
    }
}

/// Download destination settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Directory downloads are written to. Defaults to the user download dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Ask for a destination with a file dialog before each download.
    #[serde(default)]
    pub ask_destination: bool,
}

impl ExportConfig {
    /// Resolves the download directory: configured, platform download dir,
    /// then the working directory.
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_toolset() -> Vec<Tool> {
    DEFAULT_TOOLSET.to_vec()
}

fn default_width() -> f32 {
    DEFAULT_VIEWER_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_VIEWER_HEIGHT
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load config");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            viewer: ViewerConfig {
                toolset: vec![Tool::Prev, Tool::Next, Tool::ZoomIn],
                scale_levels: Some(vec![0.5, 1.0, 2.0]),
                double_click_reset: ResetPolicy::All,
                width: 640.0,
                height: 480.0,
            },
            export: ExportConfig {
                directory: Some(PathBuf::from("/tmp/downloads")),
                ask_destination: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[viewer]\nwidth = \"wide\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[viewer]\ntoolset = [\"rotate\", \"prev\"]\n")
            .expect("failed to write config");

        let loaded = load_from_path(&path).expect("partial config should load");

        assert_eq!(loaded.viewer.toolset, vec![Tool::Rotate, Tool::Prev]);
        assert_eq!(loaded.viewer.double_click_reset, ResetPolicy::ScaleOnly);
        assert_eq!(loaded.viewer.width, DEFAULT_VIEWER_WIDTH);
        assert!(!loaded.export.ask_destination);
    }

    #[test]
    fn invalid_scale_levels_fall_back_to_default_table() {
        let viewer = ViewerConfig {
            scale_levels: Some(vec![2.0, 1.0]),
            ..ViewerConfig::default()
        };

        let (table, warning) = viewer.scale_table();

        assert_eq!(table, ScaleTable::default());
        assert!(warning.is_some());
    }

    #[test]
    fn valid_scale_levels_are_used() {
        let viewer = ViewerConfig {
            scale_levels: Some(vec![0.5, 1.0, 1.5]),
            ..ViewerConfig::default()
        };

        let (table, warning) = viewer.scale_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table.natural_index(), 1);
        assert!(warning.is_none());
    }

    #[test]
    fn export_target_dir_prefers_configured_directory() {
        let export = ExportConfig {
            directory: Some(PathBuf::from("/srv/pictures")),
            ask_destination: false,
        };
        assert_eq!(export.target_dir(), PathBuf::from("/srv/pictures"));
    }
}
