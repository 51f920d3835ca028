//! Notification model
//!
//! Transient feedback shown in the banner (saved, approved, form problems).

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Mutation succeeded (green)
    Success,
    /// Informational (cyan)
    Info,
    /// Local precondition failed (yellow)
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Expired once [`NOTIFICATION_TTL`] has passed since `created_at`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTIFICATION_TTL
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
        assert_eq!(Notification::info("fyi").kind, NotificationKind::Info);
        assert_eq!(Notification::warning("hm").kind, NotificationKind::Warning);
    }

    #[test]
    fn test_not_expired_immediately() {
        assert!(!Notification::success("Saved").is_expired());
    }

    #[test]
    fn test_expires_after_ttl() {
        let n = Notification::info("Refreshed");
        let later = n.created_at + NOTIFICATION_TTL;
        assert!(n.is_expired_at(later));
        assert!(!n.is_expired_at(later - Duration::from_millis(1)));
    }
}
