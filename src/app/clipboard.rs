use copypasta_ext::copypasta::ClipboardProvider;
use copypasta_ext::x11_fork::ClipboardContext;

use super::error::{AppError, Result};

/// Seconds between clipboard polls while auto capture is on.
pub const POLL_INTERVAL_SECS: f64 = 0.5;

/// Read access to the system clipboard's plain-text flavor.
///
/// The poller only ever reads; CharCount never writes to the clipboard.
pub trait ClipboardRead {
    fn read_text(&mut self) -> Result<String>;
}

/// System clipboard backed by copypasta.
#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardRead for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        ctx.get_contents()
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Token identifying one timer chain started by [`ClipboardPoller::start`].
///
/// Each scheduled tick carries the handle it was armed under; a tick whose
/// handle no longer matches the poller's current epoch is stale and must be
/// dropped without re-arming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollHandle(u64);

/// Stopped/Running state machine for the periodic clipboard poll.
///
/// The poller itself never touches a timer: the UI shell schedules an FLTK
/// timeout per tick and asks [`ClipboardPoller::accepts`] whether the tick is
/// still live. `start()` bumps the epoch every time, so starting while
/// already running orphans the previous timer chain instead of doubling it.
#[derive(Debug, Default)]
pub struct ClipboardPoller {
    running: bool,
    epoch: u64,
}

impl ClipboardPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to Running and hand out the handle for the new timer chain.
    pub fn start(&mut self) -> PollHandle {
        self.epoch += 1;
        self.running = true;
        PollHandle(self.epoch)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a tick armed under `handle` should still deliver and re-arm.
    pub fn accepts(&self, handle: PollHandle) -> bool {
        self.running && handle.0 == self.epoch
    }

    /// The handle of the live timer chain, if any.
    pub fn current_handle(&self) -> Option<PollHandle> {
        self.running.then_some(PollHandle(self.epoch))
    }
}

pub mod test_fixtures {
    use super::{AppError, ClipboardRead, Result};

    /// In-memory clipboard. `None` models a clipboard with no plain-text
    /// flavor (an image, for instance).
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: Option<String>,
    }

    impl ClipboardRead for TestClipboard {
        fn read_text(&mut self) -> Result<String> {
            self.content
                .clone()
                .ok_or_else(|| AppError::Clipboard("no plain-text content".to_string()))
        }
    }

    /// Clipboard whose reads always fail, for transient-error paths.
    #[derive(Debug, Default)]
    pub struct FailingClipboard;

    impl ClipboardRead for FailingClipboard {
        fn read_text(&mut self) -> Result<String> {
            Err(AppError::Clipboard("platform refused the read".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poller_starts_stopped() {
        let poller = ClipboardPoller::new();
        assert!(!poller.is_running());
        assert_eq!(poller.current_handle(), None);
    }

    #[test]
    fn test_start_then_stop() {
        let mut poller = ClipboardPoller::new();
        let handle = poller.start();
        assert!(poller.is_running());
        assert!(poller.accepts(handle));

        poller.stop();
        assert!(!poller.is_running());
        assert!(!poller.accepts(handle));
    }

    #[test]
    fn test_restart_orphans_previous_timer_chain() {
        let mut poller = ClipboardPoller::new();
        let first = poller.start();
        let second = poller.start();

        assert_ne!(first, second);
        assert!(!poller.accepts(first));
        assert!(poller.accepts(second));
    }

    #[test]
    fn test_stale_handle_after_stop_start() {
        let mut poller = ClipboardPoller::new();
        let old = poller.start();
        poller.stop();
        let new = poller.start();

        assert!(!poller.accepts(old));
        assert!(poller.accepts(new));
        assert_eq!(poller.current_handle(), Some(new));
    }

    #[test]
    fn test_fixture_clipboard_flavors() {
        use test_fixtures::{FailingClipboard, TestClipboard};

        let mut clip = TestClipboard {
            content: Some("hello".to_string()),
        };
        assert_eq!(clip.read_text().unwrap(), "hello");

        let mut empty_flavor = TestClipboard { content: None };
        assert!(empty_flavor.read_text().is_err());

        let mut failing = FailingClipboard;
        assert!(failing.read_text().is_err());
    }
}
