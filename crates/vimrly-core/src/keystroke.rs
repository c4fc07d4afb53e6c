//! Keystroke-synthesising editor driver.
//!
//! The embedded editor only understands native keyboard input, so every
//! driver operation is rendered as one or more synthetic keystrokes sent to
//! an [`EditorSurface`]. Modifier choice follows the host [`Platform`].

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::driver::{Direction, EditorDriver};
use crate::error::DriverResult;
use crate::platform::Platform;

/// A single synthetic key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyStroke {
    /// A key press with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key press with the given modifiers.
    pub fn with(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn has_shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    pub fn has_control(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn has_alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Command key on macOS.
    pub fn has_meta(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SUPER)
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_control() {
            write!(f, "Ctrl+")?;
        }
        if self.has_alt() {
            write!(f, "Alt+")?;
        }
        if self.has_meta() {
            write!(f, "Meta+")?;
        }
        if self.has_shift() {
            write!(f, "Shift+")?;
        }
        match self.code {
            KeyCode::Left => write!(f, "ArrowLeft"),
            KeyCode::Right => write!(f, "ArrowRight"),
            KeyCode::Up => write!(f, "ArrowUp"),
            KeyCode::Down => write!(f, "ArrowDown"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Char(c) => write!(f, "{}", c),
            other => write!(f, "{:?}", other),
        }
    }
}

/// The native editor surface behind the embedded frame.
///
/// Implementations report [`crate::DriverError::EditorUnavailable`] when the
/// frame cannot be reached.
pub trait EditorSurface {
    /// Deliver a synthetic key press to the editor.
    fn send_key(&mut self, stroke: KeyStroke) -> DriverResult<()>;

    /// Text of the current native selection (empty when nothing is selected).
    fn selected_text(&self) -> DriverResult<String>;

    /// Drop the native selection.
    fn clear_selection(&mut self) -> DriverResult<()>;

    /// Remove focus from the editor.
    fn blur(&mut self) -> DriverResult<()>;

    /// Place text on the system clipboard ahead of a paste shortcut.
    fn write_clipboard(&mut self, text: &str) -> DriverResult<()>;
}

/// An [`EditorDriver`] that types every operation into an [`EditorSurface`].
#[derive(Debug)]
pub struct KeystrokeDriver<S> {
    surface: S,
    platform: Platform,
}

impl<S: EditorSurface> KeystrokeDriver<S> {
    pub fn new(surface: S, platform: Platform) -> Self {
        Self { surface, platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn press(&mut self, code: KeyCode) -> DriverResult<()> {
        self.surface.send_key(KeyStroke::plain(code))
    }

    fn chord(&mut self, code: KeyCode, modifiers: KeyModifiers) -> DriverResult<()> {
        self.surface.send_key(KeyStroke::with(code, modifiers))
    }

    /// Select from the start to the end of the current line.
    fn select_line(&mut self) -> DriverResult<()> {
        self.press(KeyCode::Home)?;
        self.chord(KeyCode::End, KeyModifiers::SHIFT)
    }

    fn copy_selection(&mut self) -> DriverResult<String> {
        let text = self.surface.selected_text()?;
        self.surface.clear_selection()?;
        Ok(text)
    }
}

fn arrow(direction: Direction) -> KeyCode {
    match direction {
        Direction::Left => KeyCode::Left,
        Direction::Right => KeyCode::Right,
        Direction::Up => KeyCode::Up,
        Direction::Down => KeyCode::Down,
    }
}

impl<S: EditorSurface> EditorDriver for KeystrokeDriver<S> {
    fn move_cursor(&mut self, direction: Direction) -> DriverResult<()> {
        self.press(arrow(direction))
    }

    fn extend_selection(&mut self, direction: Direction) -> DriverResult<()> {
        self.chord(arrow(direction), KeyModifiers::SHIFT)
    }

    fn move_to_line_start(&mut self) -> DriverResult<()> {
        self.press(KeyCode::Home)
    }

    fn move_to_line_end(&mut self) -> DriverResult<()> {
        self.press(KeyCode::End)
    }

    fn move_to_doc_start(&mut self) -> DriverResult<()> {
        match self.platform {
            Platform::MacOs => self.chord(KeyCode::Up, KeyModifiers::SUPER),
            Platform::Other => self.chord(KeyCode::Home, KeyModifiers::CONTROL),
        }
    }

    fn move_to_doc_end(&mut self) -> DriverResult<()> {
        match self.platform {
            Platform::MacOs => self.chord(KeyCode::Down, KeyModifiers::SUPER),
            Platform::Other => self.chord(KeyCode::End, KeyModifiers::CONTROL),
        }
    }

    fn move_word(&mut self, direction: Direction, extend: bool) -> DriverResult<()> {
        let mut modifiers = self.platform.word_modifier();
        if extend {
            modifiers |= KeyModifiers::SHIFT;
        }
        self.chord(arrow(direction), modifiers)
    }

    fn delete_at_cursor(&mut self) -> DriverResult<()> {
        self.press(KeyCode::Delete)
    }

    fn delete_line(&mut self) -> DriverResult<()> {
        self.select_line()?;
        self.press(KeyCode::Backspace)
    }

    fn delete_selection(&mut self) -> DriverResult<()> {
        self.press(KeyCode::Delete)
    }

    fn selected_text(&self) -> DriverResult<String> {
        self.surface.selected_text()
    }

    fn yank_selection(&mut self) -> DriverResult<String> {
        self.copy_selection()
    }

    fn yank_line(&mut self) -> DriverResult<String> {
        self.select_line()?;
        self.copy_selection()
    }

    fn paste_text(&mut self, text: &str) -> DriverResult<()> {
        self.surface.write_clipboard(text)?;
        let primary = self.platform.primary_modifier();
        self.chord(KeyCode::Char('v'), primary)
    }

    fn undo(&mut self) -> DriverResult<()> {
        let primary = self.platform.primary_modifier();
        self.chord(KeyCode::Char('z'), primary)
    }

    fn redo(&mut self) -> DriverResult<()> {
        match self.platform {
            Platform::MacOs => self.chord(
                KeyCode::Char('z'),
                KeyModifiers::SUPER | KeyModifiers::SHIFT,
            ),
            Platform::Other => self.chord(KeyCode::Char('y'), KeyModifiers::CONTROL),
        }
    }

    fn clear_selection(&mut self) -> DriverResult<()> {
        self.surface.clear_selection()
    }

    fn release_focus(&mut self) -> DriverResult<()> {
        self.surface.blur()
    }
}
