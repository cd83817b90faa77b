use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    current: Option<Notification>,
}

/// Transient banner with a cancellable clear timer.
///
/// Showing a new notification aborts the pending clear of the previous one
/// and starts a fresh timer. Must be used inside a tokio runtime.
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            ttl,
        }
    }

    pub fn show(&mut self, text: impl Into<String>, kind: NotificationKind) {
        self.cancel_timer();

        let generation = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.generation += 1;
            slot.current = Some(Notification {
                text: text.into(),
                kind,
            });
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
            // A newer notification owns the slot now.
            if slot.generation == generation {
                slot.current = None;
            }
        }));
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(text, NotificationKind::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(text, NotificationKind::Error);
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
