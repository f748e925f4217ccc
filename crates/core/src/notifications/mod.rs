//! Notifications

use std::fmt;

mod markup;
mod presenter;

pub use markup::escape_text;
pub use presenter::{DEFAULT_DISMISS_AFTER, NotificationPresenter};

/// Styling of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Green, "it worked".
    Success,

    /// Red. Also used for any kind name that is not recognised.
    Error,
}

impl NotificationKind {
    /// Bootstrap alert modifier for this kind.
    pub const fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "danger",
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Plain display text. Escaped when rendered.
    pub message: String,

    /// Styling.
    pub kind: NotificationKind,
}

impl Notification {
    /// Build a notification.
    pub fn new(message: impl Into<String>, kind: impl Into<NotificationKind>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
        }
    }
}
