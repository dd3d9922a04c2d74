//! Domain logic
//!
//! This module contains the contact-request domain:
//! - Contact form values and field keys
//! - Mailto link composition and parsing
//! - Text editing primitives shared with the UI layer

pub mod contact;
pub mod mailto;
pub mod ui;
