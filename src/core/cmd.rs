use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Hand a composed link to the platform mail handler (fire-and-forget)
    OpenMailto { uri: String },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Get command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::OpenMailto { .. } => "OpenMailto",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::None => "None",
        }
    }
}
