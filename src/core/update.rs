use crate::core::{
    cmd::Cmd,
    msg::{form::FormMsg, system::SystemMsg, Msg},
    state::AppState,
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Collaborators the update function needs but does not own
#[derive(Clone, Copy)]
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Key edits are ignored here; use [`update_with_context`] to apply them.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static NOOP: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, UpdateContext { text_area: &NOOP })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Form(FormMsg::Submit) => {
            let recipient = state.recipient().clone();
            let mut commands = state.form.submit(&recipient);
            commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(
                "Opening your mail client...".to_string(),
            )));
            (state, commands)
        }

        // Other form messages (delegated to FormState)
        Msg::Form(form_msg) => {
            let commands = state.form.update(form_msg, ctx.text_area);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::FormPhase,
        domain::{
            contact::{Field, Recipient},
            mailto::MailtoLink,
        },
        infrastructure::config::Config,
    };

    fn fill(state: AppState, name: &str, email: &str, message: &str) -> AppState {
        let (state, _) = update(
            Msg::Form(FormMsg::SetField(Field::Name, name.into())),
            state,
        );
        let (state, _) = update(
            Msg::Form(FormMsg::SetField(Field::Email, email.into())),
            state,
        );
        let (state, _) = update(
            Msg::Form(FormMsg::SetField(Field::Message, message.into())),
            state,
        );
        state
    }

    fn submitted_link(cmds: &[Cmd]) -> MailtoLink {
        match cmds {
            [Cmd::OpenMailto { uri }] => MailtoLink::parse(uri).unwrap(),
            other => panic!("expected a single OpenMailto, got {other:?}"),
        }
    }

    #[test]
    fn test_update_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());

        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_submit_sets_status_and_resets() {
        let state = fill(AppState::default(), "Jane Doe", "jane@x.com", "Hi there");
        assert_eq!(state.form.phase(), FormPhase::Editing);

        let (state, cmds) = update(Msg::Form(FormMsg::Submit), state);

        let link = submitted_link(&cmds);
        assert_eq!(link.subject, "Portfolio Inquiry from Jane Doe");
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Opening your mail client...")
        );
        assert_eq!(state.form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_submit_uses_configured_recipient() {
        let config = Config {
            recipient: Recipient::new("Pat", "pat@example.org"),
            ..Default::default()
        };
        let state = fill(
            AppState::new_with_config(config),
            "Jane",
            "jane@x.com",
            "Hi",
        );

        let (_, cmds) = update(Msg::Form(FormMsg::Submit), state);

        let link = submitted_link(&cmds);
        assert_eq!(link.recipient, "pat@example.org");
        assert!(link.body.starts_with("Dear Pat,\n\n"));
    }

    #[test]
    fn test_submit_with_empty_form_still_composes() {
        let (state, cmds) = update(Msg::Form(FormMsg::Submit), AppState::default());

        let link = submitted_link(&cmds);
        assert_eq!(link.subject, "Portfolio Inquiry from ");
        assert!(state.form.form().is_empty());
    }

    #[test]
    fn test_edit_without_engine_is_noop() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let (state, cmds) = update(
            Msg::Form(FormMsg::Edit(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE,
            ))),
            AppState::default(),
        );

        assert!(cmds.is_empty());
        assert_eq!(state.form.phase(), FormPhase::Idle);
    }
}
