//! Browser timers for the progress driver.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use videogen_core::{Scheduler, TaskHandle};
use wasm_bindgen::closure::Closure;

/// `setInterval`/`setTimeout` on the page's event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTask;

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> BrowserTask {
        BrowserTask::live(Timer::Interval(Interval::new(millis(period), task)))
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> BrowserTask {
        BrowserTask::live(Timer::Timeout(Timeout::new(millis(delay), task)))
    }
}

enum Timer {
    Interval(Interval),
    Timeout(Timeout),
}

/// A gloo timer, cleared when dropped.
pub struct BrowserTask {
    timer: Option<Timer>,
    // Kept alive after cancel: cancel may run inside this very closure.
    retired: Option<Closure<dyn FnMut()>>,
}

impl BrowserTask {
    fn live(timer: Timer) -> Self {
        Self {
            timer: Some(timer),
            retired: None,
        }
    }
}

impl TaskHandle for BrowserTask {
    fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.retired = Some(match timer {
                Timer::Interval(interval) => interval.cancel(),
                Timer::Timeout(timeout) => timeout.cancel(),
            });
        }
    }
}
