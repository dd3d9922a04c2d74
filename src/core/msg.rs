use serde::{Deserialize, Serialize};

pub mod form;
pub mod system;

use form::FormMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Contact form operations (delegated to FormState)
    Form(FormMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Form(form_msg) => form_msg.is_frequent(),
            Msg::System(_) => false,
        }
    }
}
