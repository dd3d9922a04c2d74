use crate::{
    core::{cmd::Cmd, msg::form::FormMsg, textarea_engine::TextAreaEngine},
    domain::{
        contact::{self, ContactForm, Field, Recipient},
        ui::CursorPosition,
    },
};

/// Editable snapshot of a single field, as seen by the textarea engine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
}

impl TextAreaState {
    pub fn new(content: String, cursor_position: CursorPosition) -> Self {
        Self {
            content,
            cursor_position,
        }
    }
}

/// Idle while nothing has been typed, Editing otherwise.
/// Submission goes straight back to Idle; there is no pending phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
}

/// Contact form state: the three values plus which one has focus
#[derive(Debug, Clone, Default)]
pub struct FormState {
    form: ContactForm,
    focus: Field,
    cursor: CursorPosition,
    sent: usize,
}

impl FormState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Cursor within the focused field
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Number of links composed since startup
    pub fn sent(&self) -> usize {
        self.sent
    }

    pub fn phase(&self) -> FormPhase {
        if self.form.is_empty() {
            FormPhase::Idle
        } else {
            FormPhase::Editing
        }
    }

    pub fn focused_snapshot(&self) -> TextAreaState {
        TextAreaState::new(self.form.get(self.focus).to_owned(), self.cursor)
    }

    /// Form-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FormMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            FormMsg::Edit(key) => {
                let edited = engine.apply_keys(&self.focused_snapshot(), &[key]);
                self.apply_snapshot(edited);
                vec![]
            }

            FormMsg::Paste(text) => {
                let text = if self.focus.is_multiline() {
                    text.replace("\r\n", "\n").replace('\r', "\n")
                } else {
                    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
                };
                let edited = engine.insert_str(&self.focused_snapshot(), &text);
                self.apply_snapshot(edited);
                vec![]
            }

            FormMsg::SetField(field, value) => {
                self.form = self.form.with_field(field, value);
                if field == self.focus {
                    self.cursor = CursorPosition::end_of(self.form.get(field));
                }
                vec![]
            }

            FormMsg::FocusNext => {
                self.focus_on(self.focus.next());
                vec![]
            }

            FormMsg::FocusPrev => {
                self.focus_on(self.focus.prev());
                vec![]
            }

            FormMsg::Focus(field) => {
                self.focus_on(field);
                vec![]
            }

            FormMsg::Clear => {
                self.reset();
                vec![Cmd::LogInfo {
                    message: "Contact form cleared".to_string(),
                }]
            }

            // Submission needs the recipient; routed through `submit` by the caller
            FormMsg::Submit => vec![],
        }
    }

    /// Composes the link for the current values, then resets the form.
    ///
    /// The reset happens whatever the mail handler later does with the link.
    pub fn submit(&mut self, recipient: &Recipient) -> Vec<Cmd> {
        let link = contact::compose(&self.form, recipient);
        log::info!(
            "Composed mailto link for {} ({} bytes of message)",
            link.recipient,
            self.form.message.len()
        );
        self.reset();
        self.sent += 1;
        vec![Cmd::OpenMailto {
            uri: link.to_uri(),
        }]
    }

    fn apply_snapshot(&mut self, edited: TextAreaState) {
        if !self.focus.is_multiline() && edited.content.contains('\n') {
            return;
        }
        self.form = self.form.with_field(self.focus, edited.content);
        self.cursor = edited.cursor_position;
    }

    fn focus_on(&mut self, field: Field) {
        self.focus = field;
        self.cursor = CursorPosition::end_of(self.form.get(field));
    }

    fn reset(&mut self) {
        self.form = ContactForm::default();
        self.focus = Field::default();
        self.cursor = CursorPosition::default();
    }
}
