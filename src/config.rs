//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/vtml-editor/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::{DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_LINES};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected highlight theme code (e.g., "default", "high-contrast")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Re-wrap long lines to the text box width
    #[serde(default = "default_word_wrap")]
    pub word_wrap: bool,

    /// Line ceiling for the text area
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Undo steps kept
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Text box width in pixels, used when no host provides one
    #[serde(default = "default_wrap_width")]
    pub wrap_width: f64,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_word_wrap() -> bool {
    true
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_wrap_width() -> f64 {
    500.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            word_wrap: default_word_wrap(),
            max_lines: default_max_lines(),
            history_limit: default_history_limit(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
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

    /// Update theme and save
    pub fn set_theme(&mut self, theme_code: &str) -> Result<(), String> {
        self.theme = theme_code.to_string();
        self.save()
    }
}
