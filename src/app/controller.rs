use std::fs;
use std::path::Path;

use super::clipboard::{ClipboardPoller, ClipboardRead, PollHandle};
use super::error::Result;
use super::metrics::{self, Metrics};

/// What a clipboard tick did, so the shell knows whether to re-arm the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clipboard text replaced the buffer; labels need updating.
    Replaced(Metrics),
    /// Nothing to import this tick (same text, empty, or a benign read
    /// failure). The poll keeps going.
    Unchanged,
    /// The tick was stale or capture is off. Do not re-arm.
    Stopped,
}

/// Owns the text buffer and everything derived from it.
///
/// The controller has no dependency on widgets: the UI shell forwards edits
/// in and pushes replacement text back out to the editor widget. All methods
/// run on the UI event thread.
pub struct EditorController {
    text: String,
    metrics: Metrics,
    poller: ClipboardPoller,
    /// Last text imported from the clipboard, for dedup across ticks.
    last_clipboard: Option<String>,
    pinned: bool,
}

impl EditorController {
    /// Empty buffer, metrics for "", auto capture already running.
    pub fn new() -> Self {
        let mut poller = ClipboardPoller::new();
        poller.start();
        Self {
            text: String::new(),
            metrics: Metrics::default(),
            poller,
            last_clipboard: None,
            pinned: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn is_capture_enabled(&self) -> bool {
        self.poller.is_running()
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// The live poll handle to schedule, if capture is on.
    pub fn poll_handle(&self) -> Option<PollHandle> {
        self.poller.current_handle()
    }

    /// User edited the widget buffer: take the new content and recompute.
    pub fn on_text_edited(&mut self, text: &str) -> Metrics {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.metrics = metrics::compute(&self.text);
        }
        self.metrics
    }

    /// Single source of truth for auto clipboard capture. Returns the handle
    /// to schedule when the poller (re)starts, `None` when it stops.
    pub fn set_auto_capture(&mut self, enabled: bool) -> Option<PollHandle> {
        if enabled {
            Some(self.poller.start())
        } else {
            self.poller.stop();
            None
        }
    }

    /// Edge-triggered auto-disable: the editor gained manual-edit focus, so
    /// a stale clipboard tick must not overwrite what the user is typing.
    /// Returns true when this event actually turned capture off.
    pub fn on_editor_focused(&mut self) -> bool {
        if self.poller.is_running() {
            self.poller.stop();
            true
        } else {
            false
        }
    }

    /// One poll tick. Swallows read failures; a tick never kills the poll.
    pub fn poll_clipboard(
        &mut self,
        handle: PollHandle,
        clipboard: &mut dyn ClipboardRead,
    ) -> TickOutcome {
        if !self.poller.accepts(handle) {
            return TickOutcome::Stopped;
        }

        let content = match clipboard.read_text() {
            Ok(content) => content,
            Err(e) => {
                log::debug!("clipboard read skipped: {}", e);
                return TickOutcome::Unchanged;
            }
        };

        if content.is_empty() {
            return TickOutcome::Unchanged;
        }
        if self.last_clipboard.as_deref() == Some(content.as_str()) {
            return TickOutcome::Unchanged;
        }

        self.last_clipboard = Some(content.clone());
        self.text = content;
        self.metrics = metrics::compute(&self.text);
        TickOutcome::Replaced(self.metrics)
    }

    /// Read `path` as UTF-8 text and replace the buffer wholesale.
    /// On failure the buffer and metrics are left untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<Metrics> {
        let content = fs::read_to_string(path)?;
        self.text = content;
        self.metrics = metrics::compute(&self.text);
        Ok(self.metrics)
    }

    /// Write the buffer to `path` as UTF-8 text.
    pub fn save_file(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.text)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Metrics {
        self.text.clear();
        self.metrics = metrics::compute(&self.text);
        self.metrics
    }

    pub fn toggle_pin(&mut self, pinned: bool) {
        self.pinned = pinned;
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::app::clipboard::test_fixtures::{FailingClipboard, TestClipboard};

    #[test]
    fn test_initial_state() {
        let controller = EditorController::new();
        assert_eq!(controller.text(), "");
        assert_eq!(controller.metrics().chars_with_spaces, 0);
        assert_eq!(controller.metrics().line_count, 1);
        assert!(controller.is_capture_enabled());
        assert!(controller.poll_handle().is_some());
        assert!(!controller.is_pinned());
    }

    #[test]
    fn test_on_text_edited_recomputes() {
        let mut controller = EditorController::new();
        let m = controller.on_text_edited("Hello World\n");
        assert_eq!(m.chars_with_spaces, 12);
        assert_eq!(m.chars_without_spaces, 10);
        assert_eq!(m.line_count, 2);
        assert_eq!(controller.text(), "Hello World\n");
    }

    #[test]
    fn test_clipboard_tick_replaces_buffer() {
        let mut controller = EditorController::new();
        let handle = controller.poll_handle().unwrap();
        let mut clip = TestClipboard {
            content: Some("pasted".to_string()),
        };

        match controller.poll_clipboard(handle, &mut clip) {
            TickOutcome::Replaced(m) => assert_eq!(m.chars_with_spaces, 6),
            other => panic!("expected Replaced, got {:?}", other),
        }
        assert_eq!(controller.text(), "pasted");
    }

    #[test]
    fn test_clipboard_tick_dedups_identical_text() {
        let mut controller = EditorController::new();
        let handle = controller.poll_handle().unwrap();
        let mut clip = TestClipboard {
            content: Some("once".to_string()),
        };

        assert!(matches!(
            controller.poll_clipboard(handle, &mut clip),
            TickOutcome::Replaced(_)
        ));
        assert_eq!(
            controller.poll_clipboard(handle, &mut clip),
            TickOutcome::Unchanged
        );
    }

    #[test]
    fn test_clipboard_tick_ignores_empty_and_missing_flavor() {
        let mut controller = EditorController::new();
        let handle = controller.poll_handle().unwrap();

        let mut empty = TestClipboard {
            content: Some(String::new()),
        };
        assert_eq!(
            controller.poll_clipboard(handle, &mut empty),
            TickOutcome::Unchanged
        );

        let mut no_text = TestClipboard { content: None };
        assert_eq!(
            controller.poll_clipboard(handle, &mut no_text),
            TickOutcome::Unchanged
        );
        assert_eq!(controller.text(), "");
    }

    #[test]
    fn test_clipboard_tick_swallows_transient_errors() {
        let mut controller = EditorController::new();
        let handle = controller.poll_handle().unwrap();
        let mut clip = FailingClipboard;

        assert_eq!(
            controller.poll_clipboard(handle, &mut clip),
            TickOutcome::Unchanged
        );
    }

    #[test]
    fn test_focus_gain_stops_capture() {
        let mut controller = EditorController::new();
        let handle = controller.poll_handle().unwrap();

        assert!(controller.on_editor_focused());
        assert!(!controller.is_capture_enabled());

        // the pending tick must be dropped, no delivery after focus
        let mut clip = TestClipboard {
            content: Some("stale".to_string()),
        };
        assert_eq!(
            controller.poll_clipboard(handle, &mut clip),
            TickOutcome::Stopped
        );
        assert_eq!(controller.text(), "");

        // edge-triggered: a second focus event is a no-op
        assert!(!controller.on_editor_focused());
    }

    #[test]
    fn test_reenable_invalidates_old_handle() {
        let mut controller = EditorController::new();
        let old = controller.poll_handle().unwrap();

        let new = controller.set_auto_capture(true).unwrap();
        assert_ne!(old, new);

        let mut clip = TestClipboard {
            content: Some("text".to_string()),
        };
        assert_eq!(
            controller.poll_clipboard(old, &mut clip),
            TickOutcome::Stopped
        );
        assert!(matches!(
            controller.poll_clipboard(new, &mut clip),
            TickOutcome::Replaced(_)
        ));
    }

    #[test]
    fn test_disable_capture() {
        let mut controller = EditorController::new();
        assert_eq!(controller.set_auto_capture(false), None);
        assert!(!controller.is_capture_enabled());
        assert_eq!(controller.poll_handle(), None);
    }

    #[test]
    fn test_load_file_replaces_buffer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line one\nline two").unwrap();

        let mut controller = EditorController::new();
        let m = controller.load_file(file.path()).unwrap();
        assert_eq!(m.line_count, 2);
        assert_eq!(controller.text(), "line one\nline two");
    }

    #[test]
    fn test_load_file_failure_leaves_buffer_unchanged() {
        let mut controller = EditorController::new();
        controller.on_text_edited("keep me");
        let before = controller.metrics();

        let result = controller.load_file(Path::new("/nonexistent/char_count.txt"));
        assert!(result.is_err());
        assert_eq!(controller.text(), "keep me");
        assert_eq!(controller.metrics(), before);
    }

    #[test]
    fn test_save_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut controller = EditorController::new();
        controller.on_text_edited("saved content\n");
        controller.save_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "saved content\n");
    }

    #[test]
    fn test_clear_resets_to_initial_metrics() {
        let mut controller = EditorController::new();
        controller.on_text_edited("something");
        let m = controller.clear();
        assert_eq!(m, Metrics::default());
        assert_eq!(controller.text(), "");
    }

    #[test]
    fn test_pin_is_independent_state() {
        let mut controller = EditorController::new();
        controller.toggle_pin(true);
        assert!(controller.is_pinned());
        // pinning has no effect on capture or buffer
        assert!(controller.is_capture_enabled());
        assert_eq!(controller.text(), "");
        controller.toggle_pin(false);
        assert!(!controller.is_pinned());
    }
}
