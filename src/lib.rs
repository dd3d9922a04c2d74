//! # contactui - terminal contact form
//!
//! A "Get in Touch" panel for the terminal. A visitor fills in name, email
//! and message; submitting composes a `mailto:` link addressed to the
//! portfolio owner and hands it to the system mail client.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (opening the mail client, resizing)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use contactui::{
//!     core::{
//!         cmd::Cmd,
//!         msg::{form::FormMsg, Msg},
//!         state::AppState,
//!         update::update,
//!     },
//!     domain::contact::Field,
//! };
//!
//! let state = AppState::default();
//! let (state, _) = update(
//!     Msg::Form(FormMsg::SetField(Field::Name, "Jane Doe".into())),
//!     state,
//! );
//! let (state, commands) = update(Msg::Form(FormMsg::Submit), state);
//!
//! // The form is reset and the link is left for the executor to open
//! assert!(state.form.form().is_empty());
//! assert!(matches!(&commands[0], Cmd::OpenMailto { uri } if uri.starts_with("mailto:")));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Contact form values and `mailto:` links
//! - [`infrastructure`] - Terminal, configuration, CLI and mail handler
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components, widgets and keybindings
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use domain::{
    contact::{compose, ContactForm, Recipient},
    mailto::MailtoLink,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
