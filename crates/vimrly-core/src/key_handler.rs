//! Key grammars for each interception mode.
//!
//! Each grammar maps one key symbol to a [`KeyResult`]. Grammars never touch
//! the editor; the dispatcher performs the resulting action.

use crate::command::EditorAction;
use crate::driver::Direction;
use crate::input::is_escape;
use crate::{Mode, SessionState};

/// Keys that may begin a two-key command.
pub const PREFIX_KEYS: [&str; 3] = ["g", "y", "d"];

/// Key that begins a colon command such as `:q`.
pub const COLON: &str = ":";

/// Result of running a key through a mode grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// Perform an action.
    Action(EditorAction),
    /// A prefix key was stored; the disambiguation timer must be armed.
    ArmPrefix(String),
    /// A colon command was started; waits for its second key with no timeout.
    Pending,
    /// The key was claimed but produced no action.
    Consumed,
    /// The key belongs to the page.
    PassThrough,
}

/// Whether a key may begin a two-key command.
pub fn is_prefix_key(key: &str) -> bool {
    PREFIX_KEYS.contains(&key)
}

/// Command-mode grammar.
///
/// Mutates only the pending and last command slots of `state`.
pub fn command_mode(key: &str, state: &mut SessionState) -> KeyResult {
    if key == COLON {
        state.set_pending_command(COLON);
        return KeyResult::Pending;
    }

    if state.has_pending_command() {
        let prefix = state.pending_command().to_string();
        state.clear_pending_command();
        state.set_last_command(key);
        return match resolve_prefix(&prefix, key) {
            Some(action) => KeyResult::Action(action),
            None => {
                tracing::debug!("Discarding prefix {:?} followed by {:?}", prefix, key);
                KeyResult::Consumed
            }
        };
    }

    if is_prefix_key(key) {
        state.set_pending_command(key);
        return KeyResult::ArmPrefix(key.to_string());
    }

    state.clear_pending_command();
    state.set_last_command(key);
    match single_key_action(key) {
        Some(action) => KeyResult::Action(action),
        None => {
            tracing::debug!("Unrecognized command: {}", key);
            KeyResult::Consumed
        }
    }
}

/// Insert-mode grammar: only the escape keys are claimed.
pub fn insert_mode(key: &str) -> KeyResult {
    if is_escape(key) {
        KeyResult::Action(EditorAction::ExitInsert)
    } else {
        KeyResult::PassThrough
    }
}

/// Visual-mode grammar: motions extend the selection.
pub fn visual_mode(key: &str) -> KeyResult {
    if is_escape(key) {
        return KeyResult::Action(EditorAction::ExitVisual);
    }
    match visual_key_action(key) {
        Some(action) => KeyResult::Action(action),
        None => KeyResult::Consumed,
    }
}

/// Resolve a prefix plus second key into a compound action.
pub fn resolve_prefix(prefix: &str, key: &str) -> Option<EditorAction> {
    match (prefix, key) {
        ("g", "g") => Some(EditorAction::DocumentStart),
        ("y", "y") => Some(EditorAction::YankLine),
        ("d", "d") => Some(EditorAction::DeleteLine),
        (":", "q") => Some(EditorAction::Quit),
        _ => None,
    }
}

/// Action performed when a prefix times out without a second key.
///
/// `g` has no single-key meaning and falls back to nothing.
pub fn prefix_fallback(prefix: &str) -> Option<EditorAction> {
    match prefix {
        "d" => Some(EditorAction::DeleteAtCursor),
        "y" => Some(EditorAction::YankAtCursor),
        _ => None,
    }
}

fn single_key_action(key: &str) -> Option<EditorAction> {
    let action = match key {
        // Mode changes
        "i" => EditorAction::EnterMode(Mode::Insert),
        "v" => EditorAction::EnterMode(Mode::Visual),

        // Basic movement
        "h" => EditorAction::MoveCursor(Direction::Left),
        "j" => EditorAction::MoveCursor(Direction::Down),
        "k" => EditorAction::MoveCursor(Direction::Up),
        "l" => EditorAction::MoveCursor(Direction::Right),

        // Word movement
        "w" => EditorAction::MoveWord {
            direction: Direction::Right,
            extend: false,
        },
        "b" => EditorAction::MoveWord {
            direction: Direction::Left,
            extend: false,
        },

        // Line and document movement
        "0" => EditorAction::LineStart,
        "$" => EditorAction::LineEnd,
        "G" => EditorAction::DocumentEnd,

        // Editing
        "y" => EditorAction::YankAtCursor,
        "p" => EditorAction::Paste,
        "u" => EditorAction::Undo,
        "." => EditorAction::Redo,

        _ => return None,
    };
    Some(action)
}

fn visual_key_action(key: &str) -> Option<EditorAction> {
    let action = match key {
        "h" => EditorAction::ExtendSelection(Direction::Left),
        "j" => EditorAction::ExtendSelection(Direction::Down),
        "k" => EditorAction::ExtendSelection(Direction::Up),
        "l" => EditorAction::ExtendSelection(Direction::Right),
        "w" => EditorAction::MoveWord {
            direction: Direction::Right,
            extend: true,
        },
        "b" => EditorAction::MoveWord {
            direction: Direction::Left,
            extend: true,
        },
        "y" => EditorAction::YankSelection,
        "d" => EditorAction::DeleteSelection,
        "p" => EditorAction::PasteOverSelection,
        "u" => EditorAction::Undo,
        "." => EditorAction::Redo,
        _ => return None,
    };
    Some(action)
}
