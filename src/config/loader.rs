use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::PromptConfig;
use crate::ui::grid::MAX_COLUMN_WIDTH;

/// Errors that can occur when loading a prompt description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl PromptConfig {
    /// Returns the path to the default prompt description.
    ///
    /// Uses `~/.config/table-select/prompt.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("table-select").join("prompt.toml")
    }

    /// Loads the prompt from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Reads, parses and validates the prompt at `path`.
    ///
    /// Unlike application settings there is no sensible default prompt, so a
    /// missing file is a read error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: PromptConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            rows = config.rows.len(),
            columns = config.columns.len(),
            "Loaded prompt config"
        );
        Ok(config)
    }

    /// Validates the prompt.
    ///
    /// Checks:
    /// - At least one row is configured
    /// - Page size is positive
    /// - Column widths are between 1 and `MAX_COLUMN_WIDTH`
    /// - `min_selected` does not exceed `max_selected`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one row must be configured".to_string(),
            });
        }

        if self.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "page_size must be at least 1".to_string(),
            });
        }

        if let Some(index) = self.col_widths.iter().position(|&width| width == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("col_widths[{}] must be at least 1", index),
            });
        }

        if let Some(index) = self
            .col_widths
            .iter()
            .position(|&width| width > MAX_COLUMN_WIDTH)
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "col_widths[{}] must be at most {}",
                    index, MAX_COLUMN_WIDTH
                ),
            });
        }

        if let (Some(min), Some(max)) = (self.validation.min_selected, self.validation.max_selected)
        {
            if min > max {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "min_selected ({}) is greater than max_selected ({})",
                        min, max
                    ),
                });
            }
        }

        Ok(())
    }
}
