//! Session state for the command-key interpreter.

use tokio::sync::watch;

use crate::Mode;

/// Text accepted by the [`SessionState`] setters.
///
/// Optional text normalises `None` to the empty string so callers holding
/// unvalidated data never need to pre-check it.
pub trait IntoText {
    fn into_text(self) -> String;
}

impl IntoText for String {
    fn into_text(self) -> String {
        self
    }
}

impl IntoText for &str {
    fn into_text(self) -> String {
        self.to_string()
    }
}

impl IntoText for &String {
    fn into_text(self) -> String {
        self.clone()
    }
}

impl IntoText for char {
    fn into_text(self) -> String {
        self.to_string()
    }
}

impl<T: IntoText> IntoText for Option<T> {
    fn into_text(self) -> String {
        self.map(IntoText::into_text).unwrap_or_default()
    }
}

/// The single mutable entity for a session.
///
/// Created inert ([`Mode::Off`]). The dispatcher owns all mutation of the
/// mode and the pending/last command slots; status-bar consumers only read
/// the mode through [`SessionState::subscribe`].
#[derive(Debug)]
pub struct SessionState {
    /// The current interception mode.
    mode: Mode,
    /// Last yanked or cut text.
    clipboard: String,
    /// Prefix key awaiting a second key (empty when none is armed).
    pending_command: String,
    /// Most recently completed command key.
    last_command: String,
    /// Mode-change notifications for the status bar.
    mode_tx: watch::Sender<Mode>,
}

impl SessionState {
    /// Create a new, inert session.
    pub fn new() -> Self {
        let (mode_tx, _) = watch::channel(Mode::Off);
        Self {
            mode: Mode::Off,
            clipboard: String::new(),
            pending_command: String::new(),
            last_command: String::new(),
            mode_tx,
        }
    }

    /// Get the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Set the current mode and notify subscribers.
    ///
    /// Every call notifies, even when the mode is unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.mode_tx.send_replace(mode);
        tracing::info!(mode = %mode, "Switched to {} mode", mode);
    }

    /// Set the mode from an unvalidated name.
    ///
    /// Unknown names are logged and ignored. Returns whether the mode was set.
    pub fn set_mode_named(&mut self, name: &str) -> bool {
        match name.parse::<Mode>() {
            Ok(mode) => {
                self.set_mode(mode);
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring mode change: {}", e);
                false
            }
        }
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<Mode> {
        self.mode_tx.subscribe()
    }

    /// Whether the interceptor is off.
    pub fn is_in_off_mode(&self) -> bool {
        self.mode == Mode::Off
    }

    /// Whether keys are read as commands.
    pub fn is_in_command_mode(&self) -> bool {
        self.mode == Mode::Command
    }

    /// Whether keys reach the editor natively.
    pub fn is_in_insert_mode(&self) -> bool {
        self.mode == Mode::Insert
    }

    /// Whether motions extend the selection.
    pub fn is_in_visual_mode(&self) -> bool {
        self.mode == Mode::Visual
    }

    /// Get the clipboard content.
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// Replace the clipboard content.
    pub fn set_clipboard(&mut self, text: impl IntoText) {
        self.clipboard = text.into_text();
    }

    /// Get the pending prefix (empty when none).
    pub fn pending_command(&self) -> &str {
        &self.pending_command
    }

    /// Store a prefix key.
    pub fn set_pending_command(&mut self, text: impl IntoText) {
        self.pending_command = text.into_text();
    }

    /// Whether a prefix is awaiting its second key.
    pub fn has_pending_command(&self) -> bool {
        !self.pending_command.is_empty()
    }

    /// Clear the pending prefix.
    pub fn clear_pending_command(&mut self) {
        self.pending_command.clear();
    }

    /// Get the last completed command key.
    pub fn last_command(&self) -> &str {
        &self.last_command
    }

    /// Record the most recently completed command key.
    pub fn set_last_command(&mut self, text: impl IntoText) {
        self.last_command = text.into_text();
    }

    /// Status-bar text for the current mode.
    pub fn status_line(&self) -> String {
        format!("MODE: {}", self.mode)
    }

    /// Whether the status bar should be shown at all.
    pub fn status_visible(&self) -> bool {
        self.mode.is_active()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
