//! Interpreter configuration.
//!
//! Read from `config.toml` in the platform config directory:
//!
//! ```toml
//! prefix_timeout_ms = 500
//! platform = "auto"        # auto | mac | other
//! start_mode = "off"       # off | command | insert | visual
//! intercept_text_fields = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::platform::{Platform, PlatformSetting};
use crate::timer::DEFAULT_PREFIX_TIMEOUT;
use crate::Mode;

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "vimrly";

/// File name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wait for the second key of a two-key command, in milliseconds.
    pub prefix_timeout_ms: u64,
    /// Which modifier set synthetic shortcuts use.
    pub platform: PlatformSetting,
    /// Mode a new session starts in.
    pub start_mode: Mode,
    /// Intercept keys in plain text fields while in insert mode.
    pub intercept_text_fields: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix_timeout_ms: DEFAULT_PREFIX_TIMEOUT.as_millis() as u64,
            platform: PlatformSetting::Auto,
            start_mode: Mode::Off,
            intercept_text_fields: false,
        }
    }
}

impl Config {
    pub fn prefix_timeout(&self) -> Duration {
        Duration::from_millis(self.prefix_timeout_ms)
    }

    pub fn platform(&self) -> Platform {
        self.platform.resolve()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "prefix_timeout_ms".to_string(),
                value: self.prefix_timeout_ms.to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Standard config file location, if the platform has a config dir.
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the standard location, falling back to defaults when the
    /// file does not exist.
    pub fn load_standard() -> Result<Self, ConfigError> {
        match Self::standard_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                tracing::debug!("No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_from(path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
