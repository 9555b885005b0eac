//! Parse diagnostics.
//!
//! Conditions that do not abort a read (skipped sections, group codes this
//! crate does not interpret, inconsistent counts) are collected as
//! [`Notification`] items on the [`Document`](crate::Document) and mirrored to
//! the `tracing` facade.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A whole section was skipped.
    NotImplemented,
    /// A group code inside a known entity was ignored.
    NotSupported,
    /// Data was read, but looks inconsistent.
    Warning,
}

impl NotificationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotImplemented => "NotImplemented",
            Self::NotSupported => "NotSupported",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was skipped or found inconsistent, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Notification {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during a read.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification and forward it to `tracing`.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let message = message.into();
        match notification_type {
            NotificationType::Warning => tracing::warn!(%message, "dxf read warning"),
            _ => tracing::debug!(kind = %notification_type, %message, "dxf read notification"),
        }
        self.items.push(Notification::new(notification_type, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Notifications of one category, in the order they were raised
    pub fn of_type(&self, kind: NotificationType) -> Vec<&Notification> {
        self.iter().filter(|n| n.notification_type == kind).collect()
    }

    pub fn has_type(&self, kind: NotificationType) -> bool {
        self.iter().any(|n| n.notification_type == kind)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
