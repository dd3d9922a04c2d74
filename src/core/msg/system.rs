use serde::{Deserialize, Serialize};

/// System-level messages for SystemState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
