use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::domain::mailto::MailtoLink;

lazy_static! {
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("valid regex");
}

/// Key of a contact form field, in focus order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Message => "Your message here...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }

    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// The three values a visitor types into the contact form.
///
/// Edits replace the whole value (`with_field`), so a snapshot taken before a
/// keystroke is never affected by it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Returns a copy with one field replaced (last write wins)
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Name => Self {
                name: value,
                ..self.clone()
            },
            Field::Email => Self {
                email: value,
                ..self.clone()
            },
            Field::Message => Self {
                message: value,
                ..self.clone()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::iter().all(|field| self.get(field).is_empty())
    }

    /// Fields that are blank after trimming, in focus order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn has_valid_email(&self) -> bool {
        is_email_shaped(self.email.trim())
    }
}

/// Owner of the portfolio, the only address a message is ever sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub display_name: String,
    pub address: String,
}

impl Recipient {
    pub fn new(display_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            address: address.into(),
        }
    }

    /// Address can be placed verbatim before the `?` of a mailto URI
    pub fn is_valid(&self) -> bool {
        is_email_shaped(&self.address)
            && !self
                .address
                .chars()
                .any(|c| matches!(c, '?' | '&' | '#' | '/' | '%'))
    }
}

impl Default for Recipient {
    fn default() -> Self {
        Self::new("Amir Masnavi", "a.masnavi1382@gmail.com")
    }
}

pub fn is_email_shaped(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

pub fn subject(form: &ContactForm) -> String {
    format!("Portfolio Inquiry from {}", form.name)
}

pub fn body(form: &ContactForm, recipient: &Recipient) -> String {
    format!(
        "Dear {},\n\n{}\n\n---\nBest regards,\n{}\n{}",
        recipient.display_name, form.message, form.name, form.email
    )
}

/// Builds the outgoing link for a submission. Never fails: empty or odd
/// values are composed as-is and left to the encoder.
pub fn compose(form: &ContactForm, recipient: &Recipient) -> MailtoLink {
    MailtoLink::new(
        recipient.address.clone(),
        subject(form),
        body(form, recipient),
    )
}
