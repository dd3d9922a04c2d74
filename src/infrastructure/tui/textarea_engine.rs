use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::{state::form::TextAreaState, textarea_engine::TextAreaEngine},
    domain::ui::CursorPosition,
};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore_textarea_from_snapshot(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::from(snapshot.content.split('\n'));
        textarea.move_cursor(CursorMove::Jump(
            u16::try_from(snapshot.cursor_position.line).unwrap_or(u16::MAX),
            u16::try_from(snapshot.cursor_position.column).unwrap_or(u16::MAX),
        ));
        textarea
    }

    fn extract_snapshot(textarea: &TextArea<'_>) -> TextAreaState {
        let (line, column) = textarea.cursor();
        TextAreaState::new(textarea.lines().join("\n"), CursorPosition { line, column })
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::restore_textarea_from_snapshot(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::extract_snapshot(&textarea)
    }

    fn insert_str(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState {
        let mut textarea = Self::restore_textarea_from_snapshot(snapshot);
        textarea.insert_str(text);
        Self::extract_snapshot(&textarea)
    }
}
