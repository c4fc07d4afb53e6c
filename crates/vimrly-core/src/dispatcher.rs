//! Command dispatcher.
//!
//! Routes each key through the grammar for the current mode, performs the
//! resulting action through the [`EditorDriver`] and keeps the prefix timer
//! in step with the pending command.

use std::time::Duration;

use tokio::time::Instant;

use crate::command::EditorAction;
use crate::config::Config;
use crate::driver::{Direction, EditorDriver};
use crate::error::{DriverError, DriverResult};
use crate::input::{FocusTarget, KeyInput};
use crate::key_handler::{self, KeyResult};
use crate::timer::{ArmedPrefix, PrefixTimer};
use crate::{Mode, SessionState};

/// What the host should do with the native key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Suppress native handling.
    Consumed,
    /// Suppress native handling; a prefix is waiting for its second key.
    Pending,
    /// Let the key reach the page.
    PassThrough,
}

impl Dispatch {
    /// Whether the host must prevent default handling and stop propagation.
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Dispatch::PassThrough)
    }
}

/// Interprets keys against a session and an editor driver.
#[derive(Debug)]
pub struct Dispatcher<D> {
    driver: D,
    timer: PrefixTimer,
    intercept_text_fields: bool,
}

impl<D: EditorDriver> Dispatcher<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            timer: PrefixTimer::default(),
            intercept_text_fields: false,
        }
    }

    /// Create a dispatcher with a custom prefix timeout.
    pub fn with_timeout(driver: D, timeout: Duration) -> Self {
        Self {
            driver,
            timer: PrefixTimer::new(timeout),
            intercept_text_fields: false,
        }
    }

    pub fn from_config(driver: D, config: &Config) -> Self {
        Self {
            driver,
            timer: PrefixTimer::new(config.prefix_timeout()),
            intercept_text_fields: config.intercept_text_fields,
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// The prefix currently waiting for its second key, if its timer is live.
    pub fn armed_prefix(&self) -> Option<&ArmedPrefix> {
        self.timer.armed()
    }

    pub fn prefix_timeout(&self) -> Duration {
        self.timer.timeout()
    }

    /// External mode toggle.
    ///
    /// Safe at any time: any armed prefix is cancelled without its fallback.
    pub fn set_mode(&mut self, state: &mut SessionState, mode: Mode) {
        self.timer.cancel();
        state.clear_pending_command();
        state.set_mode(mode);
    }

    /// Dispatch a key event, honouring its focus target.
    ///
    /// Plain text fields are left alone in insert mode unless the session
    /// was configured to intercept them.
    pub fn dispatch_input(&mut self, input: &KeyInput, state: &mut SessionState) -> Dispatch {
        if state.is_in_insert_mode()
            && input.target == FocusTarget::TextField
            && !self.intercept_text_fields
        {
            tracing::debug!("Text field focused, passing {:?} through", input.key);
            return Dispatch::PassThrough;
        }
        self.dispatch(&input.key, state)
    }

    /// Dispatch a single key symbol.
    ///
    /// A prefix whose deadline has already passed expires before the key is
    /// read, so a late second key never joins it.
    pub fn dispatch(&mut self, key: &str, state: &mut SessionState) -> Dispatch {
        self.expire_due_prefix(state);

        let result = match state.mode() {
            Mode::Off => return Dispatch::PassThrough,
            Mode::Command => {
                // Any key settles or replaces the live prefix.
                self.timer.cancel();
                key_handler::command_mode(key, state)
            }
            Mode::Insert => key_handler::insert_mode(key),
            Mode::Visual => key_handler::visual_mode(key),
        };

        match result {
            KeyResult::Action(action) => {
                tracing::debug!(mode = %state.mode(), "{:?} -> {:?}", key, action);
                self.perform(action, state);
                Dispatch::Consumed
            }
            KeyResult::ArmPrefix(prefix) => {
                self.timer.arm(prefix);
                Dispatch::Pending
            }
            KeyResult::Pending => Dispatch::Pending,
            KeyResult::Consumed => Dispatch::Consumed,
            KeyResult::PassThrough => Dispatch::PassThrough,
        }
    }

    /// Expire the armed prefix if its deadline has passed.
    ///
    /// Returns whether a prefix expired.
    pub fn expire_due_prefix(&mut self, state: &mut SessionState) -> bool {
        let due = self
            .timer
            .armed()
            .filter(|armed| armed.deadline <= Instant::now())
            .map(|armed| armed.generation);
        match due {
            Some(generation) => self.expire_prefix(generation, state),
            None => false,
        }
    }

    /// Handle the expiry of the prefix armed with `generation`.
    ///
    /// Stale expiries are ignored. Returns whether the expiry was current.
    pub fn expire_prefix(&mut self, generation: u64, state: &mut SessionState) -> bool {
        let Some(armed) = self.timer.take_if_current(generation) else {
            tracing::debug!(generation, "Ignoring stale prefix expiry");
            return false;
        };
        if state.pending_command() != armed.prefix {
            return false;
        }

        state.clear_pending_command();
        if !state.is_in_command_mode() {
            return true;
        }
        if let Some(action) = key_handler::prefix_fallback(&armed.prefix) {
            tracing::debug!("Prefix {:?} timed out, running {:?}", armed.prefix, action);
            state.set_last_command(armed.prefix.as_str());
            self.perform(action, state);
        }
        true
    }

    /// Perform an action, logging driver failures.
    pub fn perform(&mut self, action: EditorAction, state: &mut SessionState) {
        if let Err(e) = self.run(action, state) {
            match e {
                DriverError::EditorUnavailable => {
                    tracing::debug!("Editor unavailable for {:?}", action)
                }
                other => tracing::warn!("{:?} failed: {}", action, other),
            }
        }
    }

    fn run(&mut self, action: EditorAction, state: &mut SessionState) -> DriverResult<()> {
        let driver = &mut self.driver;
        match action {
            // Mode changes
            EditorAction::EnterMode(mode) => state.set_mode(mode),
            EditorAction::ExitInsert => {
                state.set_mode(Mode::Command);
                driver.release_focus()?;
            }
            EditorAction::ExitVisual => {
                state.set_mode(Mode::Command);
                driver.clear_selection()?;
            }
            EditorAction::Quit => {
                state.set_mode(Mode::Off);
                driver.clear_selection()?;
            }

            // Movement
            EditorAction::MoveCursor(direction) => driver.move_cursor(direction)?,
            EditorAction::ExtendSelection(direction) => driver.extend_selection(direction)?,
            EditorAction::MoveWord { direction, extend } => driver.move_word(direction, extend)?,
            EditorAction::LineStart => driver.move_to_line_start()?,
            EditorAction::LineEnd => driver.move_to_line_end()?,
            EditorAction::DocumentStart => driver.move_to_doc_start()?,
            EditorAction::DocumentEnd => driver.move_to_doc_end()?,

            // Editing
            EditorAction::DeleteAtCursor => driver.delete_at_cursor()?,
            EditorAction::DeleteLine => driver.delete_line()?,
            EditorAction::DeleteSelection => {
                let text = driver.selected_text()?;
                store_clipboard(state, text);
                driver.delete_selection()?;
                state.set_mode(Mode::Command);
            }
            EditorAction::YankAtCursor => {
                driver.extend_selection(Direction::Right)?;
                let text = driver.yank_selection()?;
                store_clipboard(state, text);
            }
            EditorAction::YankLine => {
                let text = driver.yank_line()?;
                store_clipboard(state, text);
            }
            EditorAction::YankSelection => {
                let text = driver.yank_selection()?;
                store_clipboard(state, text);
                state.set_mode(Mode::Command);
            }
            EditorAction::Paste => {
                if !state.clipboard().is_empty() {
                    driver.paste_text(state.clipboard())?;
                }
            }
            EditorAction::PasteOverSelection => {
                if !state.clipboard().is_empty() {
                    driver.paste_text(state.clipboard())?;
                }
                state.set_mode(Mode::Command);
            }

            // Undo/Redo
            EditorAction::Undo => driver.undo()?,
            EditorAction::Redo => driver.redo()?,
        }
        Ok(())
    }
}

/// Empty yanks leave the previous clipboard in place.
fn store_clipboard(state: &mut SessionState, text: String) {
    if !text.is_empty() {
        state.set_clipboard(text);
    }
}
