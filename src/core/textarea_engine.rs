use crossterm::event::KeyEvent;

use crate::core::state::form::TextAreaState;

/// Engine interface that applies a sequence of key events to a textarea snapshot
/// and returns the resulting snapshot. The implementation should be deterministic
/// and free of external side effects so that it can be used from the pure update path.
pub trait TextAreaEngine: Send + Sync {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;

    /// Insert text at the snapshot cursor.
    fn insert_str(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }

    fn insert_str(&self, snapshot: &TextAreaState, _text: &str) -> TextAreaState {
        snapshot.clone()
    }
}
