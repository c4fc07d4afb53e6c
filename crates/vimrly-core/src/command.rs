//! Editing actions produced by the key grammars.

use crate::driver::Direction;
use crate::Mode;

/// An action resolved from one or two keys.
///
/// Grammars only describe actions; the dispatcher performs them through the
/// editor driver and applies the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    // Mode changes
    /// Switch to the given mode.
    EnterMode(Mode),
    /// Leave insert mode and hand focus back to the page.
    ExitInsert,
    /// Leave visual mode and drop the native selection.
    ExitVisual,
    /// `:q` - switch the interceptor off.
    Quit,

    // Movement
    /// Move the cursor one character or line.
    MoveCursor(Direction),
    /// Extend the selection one character or line.
    ExtendSelection(Direction),
    /// Move one word, optionally extending the selection.
    MoveWord { direction: Direction, extend: bool },
    /// Move to start of line.
    LineStart,
    /// Move to end of line.
    LineEnd,
    /// Move to start of document.
    DocumentStart,
    /// Move to end of document.
    DocumentEnd,

    // Editing
    /// Delete the character (or selection) at the cursor.
    DeleteAtCursor,
    /// Delete the current line.
    DeleteLine,
    /// Save the selection to the clipboard, then delete it.
    DeleteSelection,
    /// Yank the character under the cursor.
    YankAtCursor,
    /// Yank the current line.
    YankLine,
    /// Yank the current selection.
    YankSelection,
    /// Paste the clipboard at the cursor.
    Paste,
    /// Paste the clipboard over the current selection.
    PasteOverSelection,

    // Undo/Redo
    Undo,
    Redo,
}
