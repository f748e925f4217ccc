//! Terminal rendering of the cart badge and notifications.

use storefront::{
    notifications::{Notification, NotificationKind},
    page::{
        MemoryBadge, MemoryNotifications, NotificationContainer, NotificationId, QuantityBadge,
    },
};
use tracing::debug;

/// Prints badge updates as they happen.
#[derive(Debug, Default)]
pub(crate) struct ConsoleBadge {
    inner: MemoryBadge,
}

impl QuantityBadge for ConsoleBadge {
    fn set_text(&self, text: &str) {
        self.inner.set_text(text);

        #[expect(clippy::print_stdout, reason = "the terminal is the page")]
        {
            println!("cart: {text}");
        }
    }
}

/// Prints notifications when shown and logs their removal.
#[derive(Debug, Default)]
pub(crate) struct ConsoleNotifications {
    inner: MemoryNotifications,
}

impl NotificationContainer for ConsoleNotifications {
    fn prepend(&self, notification: Notification) -> NotificationId {
        let line = render_line(&notification);
        let id = self.inner.prepend(notification);

        #[expect(clippy::print_stdout, reason = "the terminal is the page")]
        {
            println!("{line}");
        }

        id
    }

    fn close(&self, id: NotificationId) -> bool {
        let closed = self.inner.close(id);

        if closed {
            debug!(%id, "notification closed");
        }

        closed
    }
}

fn render_line(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✘",
    };

    format!("{marker} {}", notification.message)
}
