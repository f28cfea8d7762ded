//! Shared types, errors, timings, and page copy for the VideoGen landing page.
//!
//! This crate provides the foundational types used across the other VideoGen crates:
//! - `LandingError`: unified error taxonomy
//! - `GenerationState`: observable state of the simulated generation cycle
//! - `Notification`: transient message handed to a notification sink
//! - `GeneratorTimings`: timer configuration of the progress driver

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod content;
pub mod duration_serde;

/// Unified error type for the landing page logic.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error("Prompt is blank")]
    BlankPrompt,

    #[error("Contact field '{field}' is invalid: {reason}")]
    InvalidContact { field: &'static str, reason: String },

    #[error("Progress driver has been disposed")]
    DriverDisposed,

    #[error("Invalid generator timings: {0}")]
    InvalidTimings(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LandingError {
    /// The notification shown to the visitor for this error, if any.
    ///
    /// Only a blank prompt is reported on the page. Invalid contact input is
    /// caught by the browser before submit and is only logged.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            LandingError::BlankPrompt => Some(content::blank_prompt_notice()),
            _ => None,
        }
    }
}

/// A convenience alias for `Result<T, LandingError>`.
pub type Result<T> = std::result::Result<T, LandingError>;

// ---------------------------------------------------------------------------
// GenerationState: what the prompt form renders
// ---------------------------------------------------------------------------

/// Observable state of the simulated generation cycle.
///
/// `progress` only carries meaning while `is_generating` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationState {
    pub is_generating: bool,
    pub progress: u8,
}

impl GenerationState {
    pub const IDLE: GenerationState = GenerationState {
        is_generating: false,
        progress: 0,
    };

    /// Progress as a CSS width, e.g. `"40%"`.
    pub fn width_percent(&self) -> String {
        format!("{}%", self.progress.min(100))
    }
}

// ---------------------------------------------------------------------------
// Notification: transient message for the host toaster
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    /// Create a default-variant notification.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Create a destructive-variant notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

// ---------------------------------------------------------------------------
// GeneratorTimings: timer configuration of the progress driver
// ---------------------------------------------------------------------------

/// Timers and increments of the simulated generation cycle.
///
/// The ticker stalls at `tick_ceiling`; only the completion timer moves
/// progress to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorTimings {
    #[serde(with = "duration_serde")]
    pub tick_interval: Duration,
    pub tick_step: u8,
    pub tick_ceiling: u8,
    #[serde(with = "duration_serde")]
    pub complete_after: Duration,
    #[serde(with = "duration_serde")]
    pub settle_delay: Duration,
}

impl Default for GeneratorTimings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(800),
            tick_step: 10,
            tick_ceiling: 90,
            complete_after: Duration::from_millis(8000),
            settle_delay: Duration::from_millis(500),
        }
    }
}

impl GeneratorTimings {
    /// Parse timings from JSON; missing keys fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let timings: Self = serde_json::from_str(json)?;
        timings.validate()?;
        Ok(timings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(LandingError::InvalidTimings(
                "tick_interval must be greater than zero".into(),
            ));
        }
        if self.complete_after.is_zero() {
            return Err(LandingError::InvalidTimings(
                "complete_after must be greater than zero".into(),
            ));
        }
        if self.tick_step == 0 {
            return Err(LandingError::InvalidTimings(
                "tick_step must be greater than zero".into(),
            ));
        }
        if self.tick_ceiling >= 100 {
            return Err(LandingError::InvalidTimings(format!(
                "tick_ceiling must stay below 100, got {}",
                self.tick_ceiling
            )));
        }
        Ok(())
    }
}
