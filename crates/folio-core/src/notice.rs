//! Transient notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a success notice stays on screen.
pub const SUCCESS_TTL: Duration = Duration::from_millis(2000);
/// How long a failure notice stays on screen.
pub const FAILURE_TTL: Duration = Duration::from_millis(4000);
/// Oldest notices are dropped beyond this many.
const MAX_NOTICES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

/// Queue of notices that expire on their own.
#[derive(Debug, Default)]
pub struct Notices {
    items: VecDeque<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.push(NoticeKind::Success, text.into(), now + SUCCESS_TTL);
    }

    pub fn failure(&mut self, text: impl Into<String>, now: Instant) {
        self.push(NoticeKind::Failure, text.into(), now + FAILURE_TTL);
    }

    fn push(&mut self, kind: NoticeKind, text: String, expires_at: Instant) {
        self.items.push_back(Notice {
            kind,
            text,
            expires_at,
        });
        while self.items.len() > MAX_NOTICES {
            self.items.pop_front();
        }
    }

    /// Drop expired notices.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|notice| notice.expires_at > now);
    }

    /// Notices still visible at `now`, oldest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.items.iter().filter(move |n| n.expires_at > now)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_expire() {
        let now = Instant::now();
        let mut notices = Notices::new();
        notices.success("copied", now);
        notices.failure("nope", now);
        assert_eq!(notices.active(now).count(), 2);

        let later = now + SUCCESS_TTL;
        assert_eq!(notices.active(later).count(), 1);
        notices.prune(later + FAILURE_TTL);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let now = Instant::now();
        let mut notices = Notices::new();
        for i in 0..10 {
            notices.success(format!("n{i}"), now);
        }
        assert_eq!(notices.len(), MAX_NOTICES);
        assert_eq!(notices.active(now).next().map(|n| n.text.as_str()), Some("n6"));
    }
}
