//! Page handles.
//!
//! The dispatcher and presenter never look elements up themselves; whoever
//! builds them passes in the badge and the notification container.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::notifications::Notification;

mod memory;

pub use memory::{MemoryBadge, MemoryNotifications};

/// Identifies one notification within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wrap a raw id. Containers hand these out; callers rarely need to.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The on-page cart quantity indicator.
pub trait QuantityBadge: Send + Sync {
    /// Replace the badge's displayed text.
    fn set_text(&self, text: &str);
}

/// The element notifications are stacked into, newest first.
pub trait NotificationContainer: Send + Sync {
    /// Insert `notification` at the top of the stack.
    fn prepend(&self, notification: Notification) -> NotificationId;

    /// Remove a notification. Returns `false` if it was already gone.
    fn close(&self, id: NotificationId) -> bool;
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
