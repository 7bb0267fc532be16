//! Page controllers
//!
//! Each controller owns its form state, validation errors, loading flag,
//! result slot and pending notification. Submissions are split into a
//! synchronous `begin_submit` and `complete` so the session lock is never
//! held across the backend call.

pub mod attrition;
pub mod leakage;

pub use attrition::{AttritionPage, PendingAttrition};
pub use leakage::{LeakageOutcome, LeakagePage, PendingLeakage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One-shot message shown on the next render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

/// Monotonic submission counter. Only the newest submission's completion is
/// applied; earlier ones are stale.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }
}
