//! Reusable UI widgets
//!
//! Widgets are plain `ratatui::widgets::Widget` values built from borrowed
//! state; components decide where they go.

pub mod field_input;
pub mod recipient_card;

pub use field_input::FieldInput;
pub use recipient_card::RecipientCard;
