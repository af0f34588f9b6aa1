//! Transient user-facing notices.
//!
//! The core reports validation failures, submission outcomes, and cart
//! mutations as short messages; how they are rendered (toast, console line,
//! nothing at all) is up to the embedding surface.

use std::sync::Mutex;

/// Kind of notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier that drops every notice. For embedding without a surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _kind: NoticeKind, _message: &str) {}
}

/// Notifier that records notices in memory, for surfaces that render later
/// and for asserting on emitted messages in tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices recorded so far.
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.lock().clone()
    }

    /// Drain recorded notices.
    pub fn take(&self) -> Vec<(NoticeKind, String)> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(NoticeKind, String)>> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.lock().push((kind, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records() {
        let notifier = MemoryNotifier::new();
        notifier.notify(NoticeKind::Info, "Your cart is empty");
        notifier.notify(NoticeKind::Success, "Order placed successfully!");

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0], (NoticeKind::Info, "Your cart is empty".into()));
    }

    #[test]
    fn test_take_drains() {
        let notifier = MemoryNotifier::new();
        notifier.notify(NoticeKind::Error, "nope");
        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.notices().is_empty());
    }
}
