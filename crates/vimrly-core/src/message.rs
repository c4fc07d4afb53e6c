//! Messages sent by the host's settings panel.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::Mode;

/// A JSON message from the settings panel.
///
/// ```json
/// {"type": "toggleInsertMode", "enabled": true}
/// {"type": "toggleCommandMode", "enabled": false}
/// {"type": "setMode", "mode": "visual"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// Turn the interceptor on (into command mode) or off.
    #[serde(alias = "toggleCommandMode")]
    ToggleInsertMode { enabled: bool },
    /// Switch to a mode by name.
    SetMode { mode: String },
}

impl HostMessage {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The mode this message asks for.
    ///
    /// Unknown mode names yield `None` and are logged.
    pub fn requested_mode(&self) -> Option<Mode> {
        match self {
            HostMessage::ToggleInsertMode { enabled: true } => Some(Mode::Command),
            HostMessage::ToggleInsertMode { enabled: false } => Some(Mode::Off),
            HostMessage::SetMode { mode } => match mode.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("Ignoring mode change: {}", e);
                    None
                }
            },
        }
    }
}
