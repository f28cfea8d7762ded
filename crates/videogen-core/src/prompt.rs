//! Prompt form: the text the visitor types and the generate action.

use std::cell::RefCell;

use tracing::debug;
use videogen_types::{GenerationState, GeneratorTimings, LandingError, Result};

use crate::driver::{ProgressDriver, StartOutcome};
use crate::scheduler::Scheduler;
use crate::sink::SharedSink;

pub use crate::driver::StartOutcome as SubmitOutcome;

/// Prompt text plus the driver that simulates generating from it.
///
/// The text is never cleared; it survives a finished cycle.
pub struct PromptForm<S: Scheduler + 'static> {
    prompt: RefCell<String>,
    sink: SharedSink,
    driver: ProgressDriver<S>,
}

impl<S: Scheduler + 'static> PromptForm<S> {
    pub fn open(scheduler: S, sink: SharedSink) -> Self {
        Self {
            prompt: RefCell::new(String::new()),
            driver: ProgressDriver::open(scheduler, sink.clone()),
            sink,
        }
    }

    pub fn with_timings(scheduler: S, timings: GeneratorTimings, sink: SharedSink) -> Result<Self> {
        Ok(Self {
            prompt: RefCell::new(String::new()),
            driver: ProgressDriver::with_timings(scheduler, timings, sink.clone())?,
            sink,
        })
    }

    /// Replace the prompt text. No length or content limits.
    pub fn set_prompt(&self, text: impl Into<String>) {
        *self.prompt.borrow_mut() = text.into();
    }

    pub fn prompt(&self) -> String {
        self.prompt.borrow().clone()
    }

    pub fn state(&self) -> GenerationState {
        self.driver.state()
    }

    pub fn driver(&self) -> &ProgressDriver<S> {
        &self.driver
    }

    /// Start generating from the current prompt.
    ///
    /// While a cycle is in flight this is a no-op. A blank prompt sends one
    /// destructive notification and returns [`LandingError::BlankPrompt`];
    /// the caller has nothing left to do with it.
    pub fn submit(&self) -> Result<SubmitOutcome> {
        if self.driver.is_generating() {
            debug!("submit ignored while generating");
            return Ok(StartOutcome::AlreadyRunning);
        }
        if self.prompt.borrow().trim().is_empty() {
            let err = LandingError::BlankPrompt;
            if let Some(notice) = err.notification() {
                self.sink.notify(&notice);
            }
            return Err(err);
        }
        self.driver.start()
    }

    /// Release the driver's timers. Idempotent.
    pub fn dispose(&self) {
        self.driver.dispose();
    }
}
