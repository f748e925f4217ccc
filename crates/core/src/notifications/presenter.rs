//! Notification presenter.

use std::{
    fmt, mem,
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::{
    notifications::{Notification, NotificationKind},
    page::{NotificationContainer, NotificationId, lock},
};

/// How long a notification stays up unless dismissed earlier.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Shows transient notifications in a [`NotificationContainer`].
///
/// Each notification gets its own removal timer. Nothing is deduplicated or
/// capped: ten calls produce ten stacked notifications.
#[derive(Clone)]
pub struct NotificationPresenter {
    container: Arc<dyn NotificationContainer>,
    dismiss_after: Duration,
    timers: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl NotificationPresenter {
    /// Present into `container` with the default three second lifetime.
    pub fn new(container: Arc<dyn NotificationContainer>) -> Self {
        Self {
            container,
            dismiss_after: DEFAULT_DISMISS_AFTER,
            timers: Arc::default(),
        }
    }

    /// Override how long notifications stay visible.
    #[must_use]
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    /// Prepend a notification and schedule its removal.
    ///
    /// Must be called from within a Tokio runtime; the removal timer runs as
    /// a spawned task.
    pub fn show(
        &self,
        message: impl Into<String>,
        kind: impl Into<NotificationKind>,
    ) -> NotificationId {
        let id = self.container.prepend(Notification::new(message, kind));
        let container = Arc::clone(&self.container);
        let dismiss_after = self.dismiss_after;

        let timer = tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;

            if container.close(id) {
                debug!(%id, "notification expired");
            }
        });

        let mut timers = lock(&self.timers);

        timers.retain(|running| !running.is_finished());
        timers.push(timer);

        id
    }

    /// Wait until every notification shown so far has expired.
    ///
    /// Notifications shown while waiting are waited for too.
    pub async fn settled(&self) {
        loop {
            let pending = mem::take(&mut *lock(&self.timers));

            if pending.is_empty() {
                return;
            }

            for timer in pending {
                if let Err(join_error) = timer.await {
                    debug!("notification timer did not finish: {join_error}");
                }
            }
        }
    }

    /// Remove a notification before its timer fires, as the close button does.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.container.close(id)
    }
}

impl fmt::Debug for NotificationPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationPresenter")
            .field("dismiss_after", &self.dismiss_after)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::page::MemoryNotifications;

    use super::*;

    fn presenter() -> (Arc<MemoryNotifications>, NotificationPresenter) {
        let container = Arc::new(MemoryNotifications::new());
        let presenter = NotificationPresenter::new(container.clone());

        (container, presenter)
    }

    #[tokio::test(start_paused = true)]
    async fn notification_expires_after_three_seconds() {
        let (container, presenter) = presenter();

        presenter.show("X", "success");

        assert_eq!(
            container.visible(),
            vec![Notification::new("X", NotificationKind::Success)]
        );

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(container.visible().len(), 1, "still visible just before expiry");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(container.is_empty(), "removed once the timer fires");
    }

    #[tokio::test(start_paused = true)]
    async fn shown_messages_are_escaped_in_markup() {
        let (container, presenter) = presenter();

        presenter.show("<b>50% off</b> & more", "success");

        assert_eq!(
            container.visible_markup(),
            vec![
                "<div class=\"alert alert-success alert-dismissible fade show\" role=\"alert\">\
                 &lt;b&gt;50% off&lt;/b&gt; &amp; more\
                 <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" \
                 aria-label=\"Close\"></button>\
                 </div>"
                    .to_string()
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn settled_waits_for_every_timer() {
        let (container, presenter) = presenter();
        let started = tokio::time::Instant::now();

        presenter.show("first", NotificationKind::Success);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        presenter.show("second", NotificationKind::Error);

        presenter.settled().await;

        assert!(container.is_empty(), "both notifications expired");
        assert!(
            started.elapsed() >= Duration::from_millis(4000),
            "returned before the second notification expired"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn settled_returns_at_once_when_nothing_was_shown() {
        let (_container, presenter) = presenter();
        let started = tokio::time::Instant::now();

        presenter.settled().await;

        assert!(started.elapsed() < Duration::from_millis(1), "nothing to wait for");
    }

    #[tokio::test(start_paused = true)]
    async fn user_dismissal_beats_the_timer() {
        let (container, presenter) = presenter();

        let id = presenter.show("X", NotificationKind::Success);

        assert!(presenter.dismiss(id), "dismissal should remove it");
        assert!(container.is_empty());

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert!(container.is_empty());
        assert_eq!(container.shown(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_lifetime_is_honoured() {
        let (container, presenter) = presenter();
        let presenter = presenter.with_dismiss_after(Duration::from_millis(500));

        presenter.show("quick", NotificationKind::Error);

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert!(container.is_empty());
    }
}
