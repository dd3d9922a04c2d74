//! Status bar component
//!
//! Two rows at the bottom of the screen: key hints, then the latest status message.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::keybindings::Action};

const HINTS: [(Action, &str); 4] = [
    (Action::Submit, "send"),
    (Action::NextField, "next field"),
    (Action::ClearForm, "clear"),
    (Action::Quit, "quit"),
];

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        frame.render_widget(Clear, area);

        let hints = Paragraph::new(Line::from(self.hint_spans(state)))
            .style(Style::default().bg(Color::Black));
        frame.render_widget(hints, layout[0]);

        let message = state.system.status_message.clone().unwrap_or_default();
        let style = if message.starts_with("Error:") {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(message).style(style), layout[1]);
    }

    /// Key hints for the configured bindings; unbound actions are skipped
    pub fn hint_spans(&self, state: &AppState) -> Vec<Span<'static>> {
        let keybindings = &state.config.config.keybindings;
        HINTS
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .key_for(*action)
                    .map(|key| (key, *label))
            })
            .enumerate()
            .flat_map(|(i, (key, label))| {
                let separator = if i == 0 { "" } else { "  " };
                [
                    Span::raw(separator),
                    Span::styled(key, Style::default().fg(Color::Yellow)),
                    Span::styled(format!(" {label}"), Style::default().fg(Color::Gray)),
                ]
            })
            .collect()
    }
}
