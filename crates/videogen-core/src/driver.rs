//! Fake progress driver.
//!
//! Runs the simulated generation cycle `Idle → Running → Completing → Idle`
//! on two independent timers:
//!
//! - a ticker that adds `tick_step` every `tick_interval` and stalls once
//!   progress reaches `tick_ceiling`;
//! - a completion timer, `complete_after` from the start of the cycle, that
//!   cancels the ticker and forces progress to 100.
//!
//! `settle_delay` after reaching 100 the state resets to idle and a "video
//! ready" notification is sent. There is no abort; a started cycle runs to
//! completion unless the driver is disposed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};
use videogen_types::{content, GenerationState, GeneratorTimings, LandingError, Result};

use crate::scheduler::{Scheduler, TaskHandle};
use crate::sink::SharedSink;

/// Phase of the simulated generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completing,
}

/// Result of asking the driver to start a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A cycle is already in flight; nothing changed.
    AlreadyRunning,
}

type Listener = Box<dyn Fn(GenerationState)>;

struct Cycle<H> {
    phase: Phase,
    state: GenerationState,
    disposed: bool,
    ticker: Option<H>,
    completion: Option<H>,
    settle: Option<H>,
}

struct Core<S: Scheduler> {
    scheduler: S,
    timings: GeneratorTimings,
    sink: SharedSink,
    cycle: RefCell<Cycle<S::Handle>>,
    listeners: RefCell<Vec<Listener>>,
}

impl<S: Scheduler + 'static> Core<S> {
    fn emit(&self, state: GenerationState) {
        for listener in self.listeners.borrow().iter() {
            listener(state);
        }
    }

    fn tick(&self) {
        let state = {
            let mut cycle = self.cycle.borrow_mut();
            if cycle.disposed || cycle.phase != Phase::Running {
                return;
            }
            let ceiling = self.timings.tick_ceiling;
            if cycle.state.progress >= ceiling {
                if let Some(ticker) = cycle.ticker.as_mut() {
                    ticker.cancel();
                }
                debug!(progress = cycle.state.progress, "ticker stalled");
                return;
            }
            let next = cycle
                .state
                .progress
                .saturating_add(self.timings.tick_step)
                .min(ceiling);
            cycle.state.progress = next;
            debug!(progress = next, "progress tick");
            cycle.state
        };
        self.emit(state);
    }

    fn complete(core: &Rc<Self>) {
        let (state, ticker) = {
            let mut cycle = core.cycle.borrow_mut();
            if cycle.disposed || cycle.phase != Phase::Running {
                return;
            }
            cycle.phase = Phase::Completing;
            cycle.state.progress = 100;

            let weak = Rc::downgrade(core);
            let settle = core.scheduler.after(
                core.timings.settle_delay,
                Box::new(move || {
                    if let Some(core) = weak.upgrade() {
                        core.settle();
                    }
                }),
            );
            cycle.settle = Some(settle);
            debug!("progress forced to 100");
            (cycle.state, cycle.ticker.take())
        };
        drop(ticker);
        core.emit(state);
    }

    fn settle(&self) {
        {
            let mut cycle = self.cycle.borrow_mut();
            if cycle.disposed || cycle.phase != Phase::Completing {
                return;
            }
            cycle.phase = Phase::Idle;
            cycle.state = GenerationState::IDLE;
        }
        info!("generation cycle finished");
        self.emit(GenerationState::IDLE);
        self.sink.notify(&content::video_ready_notice());
    }
}

/// Owns one simulated generation cycle at a time.
///
/// Dropping the driver disposes it.
pub struct ProgressDriver<S: Scheduler + 'static> {
    core: Rc<Core<S>>,
}

impl<S: Scheduler + 'static> ProgressDriver<S> {
    /// Open a driver with the default timings.
    pub fn open(scheduler: S, sink: SharedSink) -> Self {
        Self::build(scheduler, GeneratorTimings::default(), sink)
    }

    /// Open a driver with custom timings.
    pub fn with_timings(scheduler: S, timings: GeneratorTimings, sink: SharedSink) -> Result<Self> {
        timings.validate()?;
        Ok(Self::build(scheduler, timings, sink))
    }

    fn build(scheduler: S, timings: GeneratorTimings, sink: SharedSink) -> Self {
        Self {
            core: Rc::new(Core {
                scheduler,
                timings,
                sink,
                cycle: RefCell::new(Cycle {
                    phase: Phase::Idle,
                    state: GenerationState::IDLE,
                    disposed: false,
                    ticker: None,
                    completion: None,
                    settle: None,
                }),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a listener called with every state change.
    ///
    /// Listeners must not register further listeners.
    pub fn on_change(&self, listener: impl Fn(GenerationState) + 'static) {
        self.core.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn state(&self) -> GenerationState {
        self.core.cycle.borrow().state
    }

    pub fn phase(&self) -> Phase {
        self.core.cycle.borrow().phase
    }

    pub fn is_generating(&self) -> bool {
        self.state().is_generating
    }

    pub fn is_disposed(&self) -> bool {
        self.core.cycle.borrow().disposed
    }

    /// Begin a cycle. The new state is observable as soon as this returns.
    pub fn start(&self) -> Result<StartOutcome> {
        let (old, state) = {
            let mut cycle = self.core.cycle.borrow_mut();
            if cycle.disposed {
                return Err(LandingError::DriverDisposed);
            }
            if cycle.phase != Phase::Idle {
                debug!(phase = ?cycle.phase, "start ignored, cycle in flight");
                return Ok(StartOutcome::AlreadyRunning);
            }

            let weak: Weak<Core<S>> = Rc::downgrade(&self.core);
            let ticker = self.core.scheduler.every(
                self.core.timings.tick_interval,
                Box::new(move || {
                    if let Some(core) = weak.upgrade() {
                        core.tick();
                    }
                }),
            );
            let weak: Weak<Core<S>> = Rc::downgrade(&self.core);
            let completion = self.core.scheduler.after(
                self.core.timings.complete_after,
                Box::new(move || {
                    if let Some(core) = weak.upgrade() {
                        Core::complete(&core);
                    }
                }),
            );

            cycle.phase = Phase::Running;
            cycle.state = GenerationState {
                is_generating: true,
                progress: 0,
            };
            // Handles of the previous cycle have all fired by now.
            let old = (
                cycle.ticker.replace(ticker),
                cycle.completion.replace(completion),
                cycle.settle.take(),
            );
            (old, cycle.state)
        };
        drop(old);

        info!("generation cycle started");
        self.core.emit(state);
        Ok(StartOutcome::Started)
    }

    /// Cancel outstanding timers and stop reacting to them. Idempotent.
    ///
    /// Must not be called from inside a driver listener or the sink while a
    /// timer callback is running.
    pub fn dispose(&self) {
        let handles = {
            let mut cycle = self.core.cycle.borrow_mut();
            if cycle.disposed {
                return;
            }
            cycle.disposed = true;
            cycle.phase = Phase::Idle;
            cycle.state = GenerationState::IDLE;
            (cycle.ticker.take(), cycle.completion.take(), cycle.settle.take())
        };
        drop(handles);
        self.core.listeners.borrow_mut().clear();
        debug!("progress driver disposed");
    }
}

impl<S: Scheduler + 'static> Drop for ProgressDriver<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
