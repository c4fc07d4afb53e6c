//! Host platform detection and modifier selection.

use std::str::FromStr;

use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The host operating-system family, as far as keyboard shortcuts care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS and iOS: Command and Option shortcuts.
    MacOs,
    /// Windows, Linux, ChromeOS: Control shortcuts.
    Other,
}

impl Platform {
    /// Detect the platform from a browser user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        const MAC_MARKERS: [&str; 4] = ["Macintosh", "Mac OS X", "iPhone", "iPad"];
        if MAC_MARKERS.iter().any(|m| user_agent.contains(m)) {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Modifier for word-wise motion (Option on macOS, Control elsewhere).
    pub fn word_modifier(&self) -> KeyModifiers {
        match self {
            Platform::MacOs => KeyModifiers::ALT,
            Platform::Other => KeyModifiers::CONTROL,
        }
    }

    /// Modifier for application shortcuts such as paste and undo
    /// (Command on macOS, Control elsewhere).
    pub fn primary_modifier(&self) -> KeyModifiers {
        match self {
            Platform::MacOs => KeyModifiers::SUPER,
            Platform::Other => KeyModifiers::CONTROL,
        }
    }
}

/// Platform selection as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    /// Use the build target.
    #[default]
    Auto,
    Mac,
    Other,
}

impl PlatformSetting {
    /// Resolve to a concrete platform.
    pub fn resolve(&self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::current(),
            PlatformSetting::Mac => Platform::MacOs,
            PlatformSetting::Other => Platform::Other,
        }
    }
}

impl FromStr for PlatformSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PlatformSetting::Auto),
            "mac" | "macos" => Ok(PlatformSetting::Mac),
            "other" => Ok(PlatformSetting::Other),
            _ => Err(ConfigError::InvalidValue {
                field: "platform".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
