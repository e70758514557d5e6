//! Editor configuration.
//!
//! A small TOML document. Every key is optional and falls back to its
//! default; unknown keys are rejected so a typo doesn't silently do nothing.
//!
//! ```toml
//! no-name-label = "[scratch]"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Label shown for a buffer that has no file path.
pub const DEFAULT_NO_NAME_LABEL: &str = "[No Name]";

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Placeholder returned by [`Buffer::display_name`](crate::buffer::Buffer::display_name)
    /// when no path is set.
    pub no_name_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_name_label: DEFAULT_NO_NAME_LABEL.to_owned(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML, wrong value types,
    /// or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file can't be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
