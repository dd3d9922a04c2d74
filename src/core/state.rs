pub mod form;
pub mod system;

use crate::{domain::contact::Recipient, infrastructure::config::Config};

pub use form::{FormPhase, FormState, TextAreaState};
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Where every composed message is addressed
    pub fn recipient(&self) -> &Recipient {
        &self.config.config.recipient
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::contact::Field;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.form.form().is_empty());
        assert_eq!(state.form.focus(), Field::Name);
        assert_eq!(state.form.phase(), FormPhase::Idle);
        assert!(!state.system.should_quit);
        assert!(state.system.status_message.is_none());
    }

    #[test]
    fn test_app_state_recipient_comes_from_config() {
        let config = Config {
            recipient: Recipient::new("Someone Else", "someone@example.com"),
            ..Default::default()
        };
        let state = AppState::new_with_config(config);

        assert_eq!(state.recipient().address, "someone@example.com");
    }
}
