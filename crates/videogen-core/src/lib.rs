//! Page logic of the VideoGen landing page, independent of any renderer.
//!
//! This crate implements the simulated generation cycle and the two forms:
//! scheduling through a cancellable task abstraction, the fake progress
//! driver, prompt and contact submission, and the notification sinks they
//! report to.

pub mod contact;
pub mod driver;
pub mod prompt;
pub mod scheduler;
pub mod sink;

pub use contact::{ContactForm, ContactSubmission};
pub use driver::{Phase, ProgressDriver, StartOutcome};
pub use prompt::{PromptForm, SubmitOutcome};
pub use scheduler::{ManualScheduler, ManualTask, Scheduler, TaskHandle, TokioScheduler, TokioTask};
pub use sink::{NotificationSink, RecordingSink, SharedSink, TracingSink};
