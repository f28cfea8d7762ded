use leptos::prelude::*;
use uuid::Uuid;
use videogen_core::NotificationSink;
use videogen_types::{Notification, NotificationVariant};

/// Toasts visible at once; a new one replaces the oldest.
pub const TOAST_LIMIT: usize = 1;

/// Time a toast stays on screen before dismissing itself.
#[cfg(feature = "hydrate")]
const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

/// Newest first, capped at `limit`.
fn enqueue(toasts: &mut Vec<Toast>, toast: Toast, limit: usize) {
    toasts.insert(0, toast);
    toasts.truncate(limit);
}

/// Drop the timers of toasts no longer on screen.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn release_timers<T>(timers: &mut Vec<(Uuid, T)>, live: &[Uuid]) {
    timers.retain(|(id, _)| live.contains(id));
}

/// Page-wide notification host, provided through context by `App`.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    // Auto-dismiss timers, one per toast. A timer that has fired stays here
    // until the next push or dismiss: it must not be dropped inside its own
    // callback.
    #[cfg(feature = "hydrate")]
    timers: StoredValue<Vec<(Uuid, gloo_timers::callback::Timeout)>, LocalStorage>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            #[cfg(feature = "hydrate")]
            timers: StoredValue::new_local(Vec::new()),
        }
    }

    pub fn push(&self, notification: Notification) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| {
            enqueue(toasts, Toast { id, notification }, TOAST_LIMIT)
        });

        #[cfg(feature = "hydrate")]
        {
            let toaster = *self;
            let timeout = gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                toaster.toasts.update(|toasts| toasts.retain(|t| t.id != id));
            });
            self.prune_timers();
            self.timers.update_value(|timers| timers.push((id, timeout)));
        }

        id
    }

    /// Close a toast, cancelling its auto-dismiss timer.
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
        #[cfg(feature = "hydrate")]
        self.prune_timers();
    }

    #[cfg(feature = "hydrate")]
    fn prune_timers(&self) {
        let live: Vec<Uuid> = self
            .toasts
            .with_untracked(|toasts| toasts.iter().map(|t| t.id).collect());
        self.timers
            .update_value(|timers| release_timers(timers, &live));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for Toaster {
    fn notify(&self, notification: &Notification) {
        self.push(notification.clone());
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <ol class="toast-viewport" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notification.variant {
                        NotificationVariant::Default => "toast",
                        NotificationVariant::Destructive => "toast toast-destructive",
                    };
                    view! {
                        <li class=class role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.notification.title.clone()}</p>
                                <p class="toast-description">
                                    {toast.notification.description.clone()}
                                </p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Close"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
