//! Contact form component
//!
//! Renders the three inputs in focus order and places the terminal cursor
//! in the focused one.

use ratatui::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState, domain::contact::Field, presentation::widgets::FieldInput,
};

#[derive(Debug, Clone, Default)]
pub struct ContactFormComponent;

impl ContactFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let constraints = Field::iter().map(|field| {
            if field.is_multiline() {
                Constraint::Min(FieldInput::height(field))
            } else {
                Constraint::Length(FieldInput::height(field))
            }
        });
        let layout = Layout::vertical(constraints).split(area);

        let form = state.form.form();
        for (field, chunk) in Field::iter().zip(layout.iter().copied()) {
            let mut input = FieldInput::new(field, form.get(field));
            if field == state.form.focus() {
                input = input.focused(state.form.cursor());
                if let Some(position) = input.cursor_position(chunk) {
                    frame.set_cursor_position(position);
                }
            }
            frame.render_widget(input, chunk);
        }
    }
}
