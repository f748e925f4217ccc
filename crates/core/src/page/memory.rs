//! In-memory page handles.

use std::{collections::VecDeque, sync::Mutex};

use crate::{
    notifications::Notification,
    page::{NotificationContainer, NotificationId, QuantityBadge, lock},
};

/// Badge that records every write.
#[derive(Debug, Default)]
pub struct MemoryBadge {
    writes: Mutex<Vec<String>>,
}

impl MemoryBadge {
    /// Create an empty badge.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown, if anything was ever written.
    pub fn text(&self) -> Option<String> {
        lock(&self.writes).last().cloned()
    }

    /// Every write in the order it happened.
    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }
}

impl QuantityBadge for MemoryBadge {
    fn set_text(&self, text: &str) {
        lock(&self.writes).push(text.to_string());
    }
}

#[derive(Debug)]
struct Rendered {
    id: NotificationId,
    notification: Notification,
    markup: String,
}

#[derive(Debug, Default)]
struct NotificationStack {
    next_id: u64,
    visible: VecDeque<Rendered>,
    shown: usize,
}

/// Notification container that keeps its stack, rendered as alert markup, in
/// memory.
#[derive(Debug, Default)]
pub struct MemoryNotifications {
    stack: Mutex<NotificationStack>,
}

impl MemoryNotifications {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently visible notifications, newest first.
    pub fn visible(&self) -> Vec<Notification> {
        lock(&self.stack)
            .visible
            .iter()
            .map(|rendered| rendered.notification.clone())
            .collect()
    }

    /// Markup of the visible notifications, newest first.
    pub fn visible_markup(&self) -> Vec<String> {
        lock(&self.stack)
            .visible
            .iter()
            .map(|rendered| rendered.markup.clone())
            .collect()
    }

    /// Number of notifications ever prepended, including removed ones.
    pub fn shown(&self) -> usize {
        lock(&self.stack).shown
    }

    /// Whether nothing is currently visible.
    pub fn is_empty(&self) -> bool {
        lock(&self.stack).visible.is_empty()
    }
}

impl NotificationContainer for MemoryNotifications {
    fn prepend(&self, notification: Notification) -> NotificationId {
        let markup = notification.to_markup();
        let mut stack = lock(&self.stack);

        stack.next_id = stack.next_id.saturating_add(1);
        stack.shown = stack.shown.saturating_add(1);

        let id = NotificationId::new(stack.next_id);

        stack.visible.push_front(Rendered {
            id,
            notification,
            markup,
        });

        id
    }

    fn close(&self, id: NotificationId) -> bool {
        let mut stack = lock(&self.stack);

        let Some(position) = stack.visible.iter().position(|rendered| rendered.id == id) else {
            return false;
        };

        stack.visible.remove(position).is_some()
    }
}
