//! Clipboard copy with notification feedback.

use std::time::Instant;

use folio_core::Notices;

/// Errors from a clipboard backend.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Something that can hold text for pasting elsewhere.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// The connection is opened on first use and then kept, because on Wayland
/// the copied text disappears when the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable("no clipboard connection".into())),
        }
    }
}

/// Result of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Copy `text` and post exactly one notice describing the result. Failures
/// never escape: they become the failure notice.
pub fn copy(
    backend: &mut dyn ClipboardBackend,
    text: &str,
    success_text: &str,
    notices: &mut Notices,
    now: Instant,
) -> CopyOutcome {
    match backend.set_text(text) {
        Ok(()) => {
            tracing::info!(len = text.len(), "copied to clipboard");
            notices.success(success_text, now);
            CopyOutcome::Copied
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            notices.failure("Failed to copy", now);
            CopyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::NoticeKind;

    #[derive(Default)]
    struct FakeClipboard {
        content: String,
        fail: bool,
    }

    impl ClipboardBackend for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("permission denied".into()));
            }
            self.content = text.to_string();
            Ok(())
        }
    }

    const URL: &str = "https://github.com/tirsasaki";

    #[test]
    fn test_success_posts_one_success_notice() {
        let now = Instant::now();
        let mut clipboard = FakeClipboard::default();
        let mut notices = Notices::new();

        let outcome = copy(&mut clipboard, URL, "GitHub URL copied!", &mut notices, now);

        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.content, URL);
        let active: Vec<_> = notices.active(now).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NoticeKind::Success);
        assert_eq!(active[0].text, "GitHub URL copied!");
    }

    #[test]
    fn test_failure_posts_one_failure_notice_and_keeps_content() {
        let now = Instant::now();
        let mut clipboard = FakeClipboard {
            content: "previous".into(),
            fail: true,
        };
        let mut notices = Notices::new();

        let outcome = copy(&mut clipboard, URL, "GitHub URL copied!", &mut notices, now);

        assert_eq!(outcome, CopyOutcome::Failed);
        assert_eq!(clipboard.content, "previous");
        let active: Vec<_> = notices.active(now).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NoticeKind::Failure);
    }

    #[test]
    fn test_repeat_copy_is_idempotent_with_a_notice_each() {
        let now = Instant::now();
        let mut clipboard = FakeClipboard::default();
        let mut notices = Notices::new();
        copy(&mut clipboard, URL, "copied", &mut notices, now);
        copy(&mut clipboard, URL, "copied", &mut notices, now);
        assert_eq!(clipboard.content, URL);
        assert_eq!(notices.active(now).count(), 2);
    }
}
