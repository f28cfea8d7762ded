//! Notification sinks.
//!
//! The page logic reports outcomes to a [`NotificationSink`] it is handed at
//! construction time. The Leptos toaster is one implementation; tests use
//! [`RecordingSink`].

use std::cell::RefCell;
use std::rc::Rc;

use videogen_types::Notification;

/// Fire-and-forget receiver of transient notifications.
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

/// Sink shared between the prompt form and its driver.
pub type SharedSink = Rc<dyn NotificationSink>;

impl<F> NotificationSink for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

// ---------------------------------------------------------------------------
// TracingSink
// ---------------------------------------------------------------------------

/// Logs every notification, then forwards it.
pub struct TracingSink<S> {
    inner: S,
}

impl<S: NotificationSink> TracingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: NotificationSink> NotificationSink for TracingSink<S> {
    fn notify(&self, notification: &Notification) {
        if notification.is_destructive() {
            tracing::warn!(title = %notification.title, "notification");
        } else {
            tracing::info!(title = %notification.title, "notification");
        }
        self.inner.notify(notification);
    }
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// Keeps every notification it receives.
#[derive(Default)]
pub struct RecordingSink {
    received: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }

    pub fn destructive_count(&self) -> usize {
        self.received
            .borrow()
            .iter()
            .filter(|n| n.is_destructive())
            .count()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &Notification) {
        self.received.borrow_mut().push(notification.clone());
    }
}
