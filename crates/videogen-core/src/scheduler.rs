//! Cancellable scheduled tasks.
//!
//! The progress driver never touches a concrete timer API. It asks a
//! [`Scheduler`] for repeating or one-shot tasks and keeps the returned
//! [`TaskHandle`]s; dropping a handle cancels its task.
//!
//! Two implementations live here:
//! - [`ManualScheduler`]: a virtual clock advanced explicitly, with
//!   deterministic ordering of tasks that fall due at the same instant.
//! - [`TokioScheduler`]: tokio timers on the current `LocalSet`.
//!
//! The browser implementation lives next to the Leptos app.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Owner of one scheduled task.
///
/// `cancel` stops future runs and may be called from inside the task's own
/// callback. A handle must not be *dropped* from inside its own callback;
/// the driver retires handles from other callbacks or from `dispose`.
pub trait TaskHandle {
    fn cancel(&mut self);
}

/// Source of repeating and one-shot tasks on a single-threaded event loop.
pub trait Scheduler {
    type Handle: TaskHandle + 'static;

    /// Run `task` every `period`, first after one full period.
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> Self::Handle;

    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

// ---------------------------------------------------------------------------
// ManualScheduler
// ---------------------------------------------------------------------------

enum Job {
    Once(Box<dyn FnOnce()>),
    Every(Box<dyn FnMut()>),
}

struct Entry {
    due: Duration,
    seq: u64,
    period: Option<Duration>,
    /// `None` while the job is running.
    job: Option<Job>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: BTreeMap<u64, Entry>,
}

impl Clock {
    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, job: Job) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let seq = self.bump_seq();
        self.entries.insert(
            id,
            Entry {
                due: self.now + delay,
                seq,
                period,
                job: Some(job),
            },
        );
        id
    }

    /// Earliest idle entry due at or before `target`. Ties resolve in
    /// scheduling order.
    fn next_due(&self, target: Duration) -> Option<u64> {
        self.entries
            .iter()
            .filter(|(_, e)| e.job.is_some() && e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(id, _)| *id)
    }
}

/// Virtual clock for deterministic timing.
///
/// Cloning yields another handle to the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks that will still fire.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Move the clock to `target`. Moving backwards is a no-op.
    pub fn advance_to(&self, target: Duration) {
        loop {
            let (id, job) = {
                let mut clock = self.clock.borrow_mut();
                let Some(id) = clock.next_due(target) else {
                    break;
                };
                let Some(entry) = clock.entries.get_mut(&id) else {
                    break;
                };
                let due = entry.due;
                let job = entry.job.take();
                clock.now = due;
                (id, job)
            };

            match job {
                Some(Job::Once(task)) => {
                    task();
                    self.clock.borrow_mut().entries.remove(&id);
                }
                Some(Job::Every(mut task)) => {
                    task();
                    let mut clock = self.clock.borrow_mut();
                    let seq = clock.bump_seq();
                    // Gone if the task cancelled itself while running.
                    if let Some(entry) = clock.entries.get_mut(&id) {
                        entry.due += entry.period.unwrap_or(Duration::from_millis(1));
                        entry.seq = seq;
                        entry.job = Some(Job::Every(task));
                    }
                }
                None => {}
            }
        }

        let mut clock = self.clock.borrow_mut();
        if target > clock.now {
            clock.now = target;
        }
    }

    fn handle(&self, id: u64) -> ManualTask {
        ManualTask {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTask;

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> ManualTask {
        let period = period.max(Duration::from_millis(1));
        let id = self
            .clock
            .borrow_mut()
            .insert(period, Some(period), Job::Every(task));
        self.handle(id)
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTask {
        let id = self.clock.borrow_mut().insert(delay, None, Job::Once(task));
        self.handle(id)
    }
}

pub struct ManualTask {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl TaskHandle for ManualTask {
    fn cancel(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.entries.remove(&self.id);
            }
        }
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ---------------------------------------------------------------------------
// TokioScheduler
// ---------------------------------------------------------------------------

/// Tokio timers spawned with [`tokio::task::spawn_local`].
///
/// Must be used from within a [`tokio::task::LocalSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Handle = TokioTask;

    fn every(&self, period: Duration, mut task: Box<dyn FnMut()>) -> TokioTask {
        let handle = tokio::task::spawn_local(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                task();
            }
        });
        TokioTask(Some(handle))
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TokioTask {
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        TokioTask(Some(handle))
    }
}

pub struct TokioTask(Option<tokio::task::JoinHandle<()>>);

impl TaskHandle for TokioTask {
    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
        }
    }
}

impl Drop for TokioTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn one_shot_fires_once_at_its_deadline() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        let _task = sched.after(ms(500), Box::new(move || f.set(f.get() + 1)));

        sched.advance(ms(499));
        assert_eq!(fired.get(), 0);
        sched.advance(ms(1));
        assert_eq!(fired.get(), 1);
        sched.advance(ms(10_000));
        assert_eq!(fired.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn repeating_task_fires_each_period() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        let _task = sched.every(ms(800), Box::new(move || f.set(f.get() + 1)));

        sched.advance(ms(799));
        assert_eq!(fired.get(), 0);
        sched.advance(ms(1));
        assert_eq!(fired.get(), 1);
        sched.advance(ms(2400));
        assert_eq!(fired.get(), 4);
        assert_eq!(sched.now(), ms(3200));
    }

    #[test]
    fn dropping_handle_cancels() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let task = sched.after(ms(100), Box::new(move || f.set(true)));
        drop(task);
        sched.advance(ms(1000));
        assert!(!fired.get());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn task_can_cancel_itself_while_running() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<ManualTask>>> = Rc::new(RefCell::new(None));

        let f = fired.clone();
        let s = slot.clone();
        let task = sched.every(
            ms(100),
            Box::new(move || {
                f.set(f.get() + 1);
                if f.get() == 3 {
                    if let Some(t) = s.borrow_mut().as_mut() {
                        t.cancel();
                    }
                }
            }),
        );
        *slot.borrow_mut() = Some(task);

        sched.advance(ms(1000));
        assert_eq!(fired.get(), 3);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn simultaneous_tasks_run_in_scheduling_order() {
        let sched = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = order.clone();
        let _a = sched.after(ms(200), Box::new(move || o.borrow_mut().push("a")));
        let o = order.clone();
        let _b = sched.after(ms(100), Box::new(move || o.borrow_mut().push("b")));
        let o = order.clone();
        let _c = sched.after(ms(200), Box::new(move || o.borrow_mut().push("c")));

        sched.advance(ms(200));
        assert_eq!(*order.borrow(), vec!["b", "a", "c"]);
    }

    #[test]
    fn task_scheduled_from_callback_uses_callback_time() {
        let sched = ManualScheduler::new();
        let fired_at = Rc::new(Cell::new(None));
        let inner: Rc<RefCell<Option<ManualTask>>> = Rc::new(RefCell::new(None));

        let s = sched.clone();
        let f = fired_at.clone();
        let slot = inner.clone();
        let _outer = sched.after(
            ms(8000),
            Box::new(move || {
                let s2 = s.clone();
                let f2 = f.clone();
                let t = s.after(ms(500), Box::new(move || f2.set(Some(s2.now()))));
                *slot.borrow_mut() = Some(t);
            }),
        );

        sched.advance(ms(8499));
        assert_eq!(fired_at.get(), None);
        sched.advance(ms(1));
        assert_eq!(fired_at.get(), Some(ms(8500)));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_one_shot_and_abort() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let fired = Rc::new(Cell::new(0));

                let f = fired.clone();
                let _kept = TokioScheduler.after(ms(500), Box::new(move || f.set(f.get() + 1)));
                let f = fired.clone();
                let dropped = TokioScheduler.after(ms(500), Box::new(move || f.set(f.get() + 10)));
                drop(dropped);

                tokio::time::sleep(ms(600)).await;
                assert_eq!(fired.get(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_interval_ticks_until_cancelled() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let ticks = Rc::new(Cell::new(0));
                let t = ticks.clone();
                let mut task = TokioScheduler.every(ms(800), Box::new(move || t.set(t.get() + 1)));

                tokio::time::sleep(ms(2500)).await;
                assert_eq!(ticks.get(), 3);

                task.cancel();
                tokio::time::sleep(ms(5000)).await;
                assert_eq!(ticks.get(), 3);
            })
            .await;
    }
}
