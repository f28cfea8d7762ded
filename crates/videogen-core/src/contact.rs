//! Contact form submission.
//!
//! Nothing is sent anywhere: a valid submission produces one notification and
//! is then dropped. The constraint check mirrors what the browser enforces
//! through `required` and `type="email"`, for submissions that bypass it.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use videogen_types::content::{self, ContactField, FieldKind, CONTACT_FIELDS};
use videogen_types::{LandingError, Result};

use crate::sink::SharedSink;

lazy_static! {
    // WHATWG "valid e-mail address" production used by <input type="email">.
    static ref EMAIL: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern compiles");
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    fn value(&self, field: &ContactField) -> Result<&str> {
        match field.id {
            "name" => Ok(&self.name),
            "email" => Ok(&self.email),
            "message" => Ok(&self.message),
            other => Err(LandingError::InvalidContact {
                field: field.id,
                reason: format!("no submission value for field '{other}'"),
            }),
        }
    }

    /// Apply the native constraints of every contact field.
    pub fn check_constraints(&self) -> Result<()> {
        for field in CONTACT_FIELDS.iter() {
            check_field(field, self.value(field)?)?;
        }
        Ok(())
    }
}

fn check_field(field: &ContactField, value: &str) -> Result<()> {
    if value.is_empty() {
        if field.required {
            return Err(LandingError::InvalidContact {
                field: field.id,
                reason: "value is required".into(),
            });
        }
        return Ok(());
    }
    // Browsers strip surrounding whitespace from email inputs before checking.
    if field.kind == FieldKind::Email && !EMAIL.is_match(value.trim()) {
        return Err(LandingError::InvalidContact {
            field: field.id,
            reason: format!("'{value}' is not an email address"),
        });
    }
    Ok(())
}

/// Stateless contact form.
pub struct ContactForm {
    sink: SharedSink,
}

impl ContactForm {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Accept a submission: one "message sent" notification, values discarded.
    ///
    /// A submission failing the native constraints is rejected without a
    /// notification, as the browser would never have fired the submit event.
    pub fn submit(&self, submission: ContactSubmission) -> Result<()> {
        submission.check_constraints()?;
        tracing::info!("contact form submitted");
        self.sink.notify(&content::message_sent_notice());
        Ok(())
    }
}
