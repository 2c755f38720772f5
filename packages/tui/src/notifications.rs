//! Transient user-facing messages that expire on their own
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(message: String, severity: Severity) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message,
            severity,
            created_at: Utc::now(),
        }
    }
}

/// Queue of visible notifications in arrival order.
///
/// Every push starts its own removal timer, so entries expire independently.
/// The queue is unbounded.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: Arc<Mutex<Vec<Notification>>>,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // A panic while holding the lock cannot leave the Vec half-updated
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a notification and schedule its removal. Must be called inside a tokio runtime.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> String {
        let notification = Notification::new(message.into(), severity);
        let id = notification.id.clone();
        debug!(?severity, message = %notification.message, "Notification pushed");
        self.lock().push(notification);

        let queue = self.clone();
        let expiring = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(queue.ttl).await;
            queue.remove(&expiring);
        });

        id
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.push(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.push(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.push(message, Severity::Error)
    }

    fn remove(&self, id: &str) {
        self.lock().retain(|n| n.id != id);
    }

    /// Visible notifications, oldest first
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
