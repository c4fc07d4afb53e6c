//! Recording editor surface

use vimrly_core::{DriverResult, EditorSurface, KeyStroke};

/// Surface that records keystrokes and serves a fixed selection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub strokes: Vec<KeyStroke>,
    pub selection: String,
    pub clipboard: Option<String>,
    pub blurred: usize,
}

impl EditorSurface for RecordingSurface {
    fn send_key(&mut self, stroke: KeyStroke) -> DriverResult<()> {
        self.strokes.push(stroke);
        Ok(())
    }

    fn selected_text(&self) -> DriverResult<String> {
        Ok(self.selection.clone())
    }

    fn clear_selection(&mut self) -> DriverResult<()> {
        Ok(())
    }

    fn blur(&mut self) -> DriverResult<()> {
        self.blurred += 1;
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> DriverResult<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
