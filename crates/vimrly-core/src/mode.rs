//! Interception modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// The interception mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Interceptor is inert; every key reaches the page natively.
    #[default]
    Off,
    /// Keys are interpreted as commands.
    Command,
    /// Native typing; only the exit keys are intercepted.
    Insert,
    /// Command grammar with motions extending the selection.
    Visual,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Off, Mode::Command, Mode::Insert, Mode::Visual];

    /// Returns the display name for this mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Off => "OFF",
            Mode::Command => "COMMAND",
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
        }
    }

    /// Returns a short code for this mode (for compact display).
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Off => "OFF",
            Mode::Command => "CMD",
            Mode::Insert => "INS",
            Mode::Visual => "VIS",
        }
    }

    /// Whether the interceptor claims any keys at all in this mode.
    pub fn is_active(&self) -> bool {
        !matches!(self, Mode::Off)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Mode::Off),
            "command" | "normal" => Ok(Mode::Command),
            "insert" => Ok(Mode::Insert),
            "visual" => Ok(Mode::Visual),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
