use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::contact::Field;

/// Contact form messages for FormState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    /// Apply a key to the focused field
    Edit(KeyEvent),
    /// Insert pasted text at the cursor of the focused field
    Paste(String),
    /// Replace a field value outright
    SetField(Field, String),

    FocusNext,
    FocusPrev,
    Focus(Field),

    /// Reset the form without sending anything
    Clear,
    /// Compose the mailto link, hand it off and reset the form
    Submit,
}

impl FormMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, FormMsg::Edit(_))
    }
}
