//! Transient notifications.

use chrono::{DateTime, TimeDelta, Utc};

/// How long a toast stays visible.
pub const TOAST_DURATION_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= TimeDelta::seconds(TOAST_DURATION_SECS)
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Utc::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) {
        self.items.push(Toast {
            message: message.into(),
            kind,
            created_at: now,
        });
    }

    /// Drop every toast older than [`TOAST_DURATION_SECS`].
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.items.retain(|toast| !toast.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Most recent toast, if any.
    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}
