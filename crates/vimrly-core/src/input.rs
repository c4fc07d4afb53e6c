//! Key input delivered by the host's key-event source.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The element that had focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The embedded rich-text editor.
    Editor,
    /// A plain text input (input, textarea, contenteditable outside the editor).
    TextField,
    /// The host could not tell.
    #[default]
    Unknown,
}

/// One key event, as a key symbol plus its focus context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Key symbol such as `"h"`, `"G"`, `"$"` or `"Escape"`.
    pub key: String,
    pub target: FocusTarget,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: FocusTarget::Unknown,
        }
    }

    pub fn in_text_field(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: FocusTarget::TextField,
        }
    }

    pub fn with_target(mut self, target: FocusTarget) -> Self {
        self.target = target;
        self
    }
}

impl From<&str> for KeyInput {
    fn from(key: &str) -> Self {
        KeyInput::new(key)
    }
}

/// Whether a key symbol is one of the escape spellings.
pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Convert a terminal key event into a key symbol.
///
/// Printable characters map to themselves; named keys use the browser
/// spelling (`"Escape"`, `"Enter"`, `"ArrowLeft"`). Chords with Control or
/// Alt have no symbol and return `None`.
pub fn key_symbol(event: &KeyEvent) -> Option<String> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    let symbol = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => return None,
    };
    Some(symbol)
}
