//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::RecipientCard};

pub mod contact_form;
pub mod status_bar;

pub use contact_form::ContactFormComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub contact_form: ContactFormComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen: recipient header, form, status bar
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::vertical([
            Constraint::Length(RecipientCard::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame.area());

        frame.render_widget(RecipientCard::new(state.recipient()), layout[0]);
        self.contact_form.view(state, frame, layout[1]);
        self.status_bar.view(state, frame, layout[2]);
    }
}
