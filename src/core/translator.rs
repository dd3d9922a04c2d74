use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{
    core::{
        msg::{form::FormMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::contact::Field,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings and focus
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => vec![Msg::Form(FormMsg::Paste(text))],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    // Single-line inputs advance focus on Enter, like a form would
    if key.code == KeyCode::Enter && !state.form.focus().is_multiline() {
        return vec![Msg::Form(FormMsg::FocusNext)];
    }

    let edit = Msg::Form(FormMsg::Edit(key));
    if state.system.status_message.is_some() {
        // A new keystroke makes the previous status stale
        return vec![Msg::System(SystemMsg::ClearStatusMessage), edit];
    }
    vec![edit]
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextField => vec![Msg::Form(FormMsg::FocusNext)],
        Action::PrevField => vec![Msg::Form(FormMsg::FocusPrev)],
        Action::ClearForm => vec![
            Msg::Form(FormMsg::Clear),
            Msg::System(SystemMsg::UpdateStatusMessage("Form cleared".to_string())),
        ],
        Action::Submit => translate_submit(state),
    }
}

/// Gate submission on the required fields, the way the form's
/// `required` and email inputs would
fn translate_submit(state: &AppState) -> Vec<Msg> {
    let form = state.form.form();

    let missing = form.missing_fields();
    if let Some(first) = missing.first() {
        let labels = missing
            .iter()
            .map(Field::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return vec![
            Msg::System(SystemMsg::UpdateStatusMessage(format!(
                "Please fill in: {labels}"
            ))),
            Msg::Form(FormMsg::Focus(*first)),
        ];
    }

    if !form.has_valid_email() {
        return vec![
            Msg::System(SystemMsg::UpdateStatusMessage(
                "Please enter a valid email address".to_string(),
            )),
            Msg::Form(FormMsg::Focus(Field::Email)),
        ];
    }

    vec![Msg::Form(FormMsg::Submit)]
}
