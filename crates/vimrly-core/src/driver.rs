//! Editor driver capability.
//!
//! This trait defines the operations the dispatcher performs against the
//! embedded editor. The interpreter keeps no model of the document: every
//! motion and edit is delegated here.

use crate::error::{DriverError, DriverResult};

/// Direction of a cursor or selection movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Operations performed against the embedded editor surface.
///
/// Every operation reports failure through [`DriverResult`] rather than
/// panicking; [`DriverError::EditorUnavailable`] means the surface could not
/// be reached at all.
pub trait EditorDriver {
    // =========================================================================
    // Movement
    // =========================================================================

    /// Move the cursor one character or line.
    fn move_cursor(&mut self, direction: Direction) -> DriverResult<()>;

    /// Extend the selection one character or line.
    fn extend_selection(&mut self, direction: Direction) -> DriverResult<()>;

    /// Move to the start of the current line.
    fn move_to_line_start(&mut self) -> DriverResult<()>;

    /// Move to the end of the current line.
    fn move_to_line_end(&mut self) -> DriverResult<()>;

    /// Move to the start of the document.
    fn move_to_doc_start(&mut self) -> DriverResult<()>;

    /// Move to the end of the document.
    fn move_to_doc_end(&mut self) -> DriverResult<()>;

    /// Move one word left or right, optionally extending the selection.
    fn move_word(&mut self, direction: Direction, extend: bool) -> DriverResult<()>;

    // =========================================================================
    // Editing
    // =========================================================================

    /// Delete the character (or selection) at the cursor.
    fn delete_at_cursor(&mut self) -> DriverResult<()>;

    /// Delete the current line.
    fn delete_line(&mut self) -> DriverResult<()>;

    /// Delete the current selection.
    fn delete_selection(&mut self) -> DriverResult<()>;

    /// Text of the current selection, leaving it in place.
    fn selected_text(&self) -> DriverResult<String>;

    /// Copy the current selection and return its text.
    fn yank_selection(&mut self) -> DriverResult<String>;

    /// Copy the current line and return its text.
    fn yank_line(&mut self) -> DriverResult<String>;

    /// Insert text at the cursor (replacing any selection).
    fn paste_text(&mut self, text: &str) -> DriverResult<()>;

    /// Undo the last edit.
    fn undo(&mut self) -> DriverResult<()>;

    /// Redo the last undone edit.
    fn redo(&mut self) -> DriverResult<()>;

    // =========================================================================
    // Focus and selection
    // =========================================================================

    /// Drop the native selection.
    fn clear_selection(&mut self) -> DriverResult<()>;

    /// Hand input focus back from the embedded editor.
    fn release_focus(&mut self) -> DriverResult<()>;
}

/// A driver with no editor behind it.
///
/// Every operation reports [`DriverError::EditorUnavailable`]. Used before the
/// editor frame has been found.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDriver;

impl EditorDriver for NullDriver {
    fn move_cursor(&mut self, _direction: Direction) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn extend_selection(&mut self, _direction: Direction) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn move_to_line_start(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn move_to_line_end(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn move_to_doc_start(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn move_to_doc_end(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn move_word(&mut self, _direction: Direction, _extend: bool) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn delete_at_cursor(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn delete_line(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn delete_selection(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn selected_text(&self) -> DriverResult<String> {
        Err(DriverError::EditorUnavailable)
    }

    fn yank_selection(&mut self) -> DriverResult<String> {
        Err(DriverError::EditorUnavailable)
    }

    fn yank_line(&mut self) -> DriverResult<String> {
        Err(DriverError::EditorUnavailable)
    }

    fn paste_text(&mut self, _text: &str) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn undo(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn redo(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn clear_selection(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }

    fn release_focus(&mut self) -> DriverResult<()> {
        Err(DriverError::EditorUnavailable)
    }
}

impl<D: EditorDriver + ?Sized> EditorDriver for Box<D> {
    fn move_cursor(&mut self, direction: Direction) -> DriverResult<()> {
        (**self).move_cursor(direction)
    }

    fn extend_selection(&mut self, direction: Direction) -> DriverResult<()> {
        (**self).extend_selection(direction)
    }

    fn move_to_line_start(&mut self) -> DriverResult<()> {
        (**self).move_to_line_start()
    }

    fn move_to_line_end(&mut self) -> DriverResult<()> {
        (**self).move_to_line_end()
    }

    fn move_to_doc_start(&mut self) -> DriverResult<()> {
        (**self).move_to_doc_start()
    }

    fn move_to_doc_end(&mut self) -> DriverResult<()> {
        (**self).move_to_doc_end()
    }

    fn move_word(&mut self, direction: Direction, extend: bool) -> DriverResult<()> {
        (**self).move_word(direction, extend)
    }

    fn delete_at_cursor(&mut self) -> DriverResult<()> {
        (**self).delete_at_cursor()
    }

    fn delete_line(&mut self) -> DriverResult<()> {
        (**self).delete_line()
    }

    fn delete_selection(&mut self) -> DriverResult<()> {
        (**self).delete_selection()
    }

    fn selected_text(&self) -> DriverResult<String> {
        (**self).selected_text()
    }

    fn yank_selection(&mut self) -> DriverResult<String> {
        (**self).yank_selection()
    }

    fn yank_line(&mut self) -> DriverResult<String> {
        (**self).yank_line()
    }

    fn paste_text(&mut self, text: &str) -> DriverResult<()> {
        (**self).paste_text(text)
    }

    fn undo(&mut self) -> DriverResult<()> {
        (**self).undo()
    }

    fn redo(&mut self) -> DriverResult<()> {
        (**self).redo()
    }

    fn clear_selection(&mut self) -> DriverResult<()> {
        (**self).clear_selection()
    }

    fn release_focus(&mut self) -> DriverResult<()> {
        (**self).release_focus()
    }
}
