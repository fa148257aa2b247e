use std::time::{Duration, Instant};

use parking_lot::Mutex;

pub const DEFAULT_ECHO_TIMEOUT: Duration = Duration::from_millis(500);

struct PendingWrite {
    content_id: u64,
    deadline: Instant,
}

/// Absorbs the clipboard event caused by the daemon's own write.
///
/// Promoting, pasting or editing an entry stores its content back to the OS
/// clipboard. The watcher observes that store like any other change; without
/// suppression the self-write would be handled as a fresh external copy. The
/// guard remembers the content id of the latest self-write until a deadline;
/// the next watcher event carrying that id is absorbed instead of forwarded.
pub struct EchoGuard {
    pending: Mutex<Option<PendingWrite>>,
    timeout: Duration,
}

impl Default for EchoGuard {
    fn default() -> Self { Self::new(DEFAULT_ECHO_TIMEOUT) }
}

impl EchoGuard {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self { Self { pending: Mutex::new(None), timeout } }

    /// Records a self-write. A newer self-write replaces an older pending one.
    pub fn arm(&self, content_id: u64) {
        let mut pending = self.pending.lock();
        *pending = Some(PendingWrite { content_id, deadline: Instant::now() + self.timeout });
    }

    /// Returns `true` when `content_id` matches an unexpired pending
    /// self-write. The pending write is cleared on match or expiry.
    pub fn try_absorb(&self, content_id: u64) -> bool {
        let mut pending = self.pending.lock();
        match pending.take() {
            Some(write) if write.deadline < Instant::now() => false,
            Some(write) if write.content_id == content_id => true,
            other => {
                *pending = other;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::EchoGuard;

    #[test]
    fn absorbs_matching_write_once() {
        let guard = EchoGuard::default();
        guard.arm(42);
        assert!(guard.try_absorb(42));
        assert!(!guard.try_absorb(42));
    }

    #[test]
    fn ignores_other_content() {
        let guard = EchoGuard::default();
        guard.arm(42);
        assert!(!guard.try_absorb(7));
        // the pending write survives a non-matching event
        assert!(guard.try_absorb(42));
    }

    #[test]
    fn newer_write_replaces_older() {
        let guard = EchoGuard::default();
        guard.arm(1);
        guard.arm(2);
        assert!(!guard.try_absorb(1));
        assert!(guard.try_absorb(2));
    }

    #[test]
    fn expires() {
        let guard = EchoGuard::new(Duration::from_millis(10));
        guard.arm(42);
        std::thread::sleep(Duration::from_millis(30));
        assert!(!guard.try_absorb(42));
    }

    #[test]
    fn empty_guard_absorbs_nothing() {
        let guard = EchoGuard::default();
        assert!(!guard.try_absorb(0));
    }
}
