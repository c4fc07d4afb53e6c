//! Recording editor driver

use vimrly_core::{Direction, DriverError, DriverResult, EditorDriver};

/// One driver operation, as seen by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MoveCursor(Direction),
    ExtendSelection(Direction),
    MoveWord(Direction, bool),
    LineStart,
    LineEnd,
    DocStart,
    DocEnd,
    DeleteAtCursor,
    DeleteLine,
    DeleteSelection,
    YankSelection,
    YankLine,
    Paste(String),
    Undo,
    Redo,
    ClearSelection,
    ReleaseFocus,
}

/// Driver that records every call and serves canned text.
#[derive(Debug, Clone)]
pub struct RecordingDriver {
    pub calls: Vec<Call>,
    /// Text returned for the current selection.
    pub selection: String,
    /// Text returned when yanking a line.
    pub line: String,
    /// When false every call fails with `EditorUnavailable`.
    pub available: bool,
}

impl Default for RecordingDriver {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            selection: String::new(),
            line: String::new(),
            available: true,
        }
    }
}

impl RecordingDriver {
    pub fn with_selection(text: &str) -> Self {
        Self {
            selection: text.to_string(),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn record(&mut self, call: Call) -> DriverResult<()> {
        if !self.available {
            return Err(DriverError::EditorUnavailable);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl EditorDriver for RecordingDriver {
    fn move_cursor(&mut self, direction: Direction) -> DriverResult<()> {
        self.record(Call::MoveCursor(direction))
    }

    fn extend_selection(&mut self, direction: Direction) -> DriverResult<()> {
        self.record(Call::ExtendSelection(direction))
    }

    fn move_to_line_start(&mut self) -> DriverResult<()> {
        self.record(Call::LineStart)
    }

    fn move_to_line_end(&mut self) -> DriverResult<()> {
        self.record(Call::LineEnd)
    }

    fn move_to_doc_start(&mut self) -> DriverResult<()> {
        self.record(Call::DocStart)
    }

    fn move_to_doc_end(&mut self) -> DriverResult<()> {
        self.record(Call::DocEnd)
    }

    fn move_word(&mut self, direction: Direction, extend: bool) -> DriverResult<()> {
        self.record(Call::MoveWord(direction, extend))
    }

    fn delete_at_cursor(&mut self) -> DriverResult<()> {
        self.record(Call::DeleteAtCursor)
    }

    fn delete_line(&mut self) -> DriverResult<()> {
        self.record(Call::DeleteLine)
    }

    fn delete_selection(&mut self) -> DriverResult<()> {
        self.record(Call::DeleteSelection)
    }

    fn selected_text(&self) -> DriverResult<String> {
        if !self.available {
            return Err(DriverError::EditorUnavailable);
        }
        Ok(self.selection.clone())
    }

    fn yank_selection(&mut self) -> DriverResult<String> {
        self.record(Call::YankSelection)?;
        Ok(self.selection.clone())
    }

    fn yank_line(&mut self) -> DriverResult<String> {
        self.record(Call::YankLine)?;
        Ok(self.line.clone())
    }

    fn paste_text(&mut self, text: &str) -> DriverResult<()> {
        self.record(Call::Paste(text.to_string()))
    }

    fn undo(&mut self) -> DriverResult<()> {
        self.record(Call::Undo)
    }

    fn redo(&mut self) -> DriverResult<()> {
        self.record(Call::Redo)
    }

    fn clear_selection(&mut self) -> DriverResult<()> {
        self.record(Call::ClearSelection)
    }

    fn release_focus(&mut self) -> DriverResult<()> {
        self.record(Call::ReleaseFocus)
    }
}
