use std::path::Path;

use fltk::{
    app::{self, Sender},
    button::CheckButton,
    dialog,
    enums::Font,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::buffer_utils::buffer_text_no_leak;
use super::clipboard::{ClipboardRead, PollHandle, POLL_INTERVAL_SECS};
use super::controller::{EditorController, TickOutcome};
use super::messages::Message;
use super::metrics::Metrics;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::{CountLabels, MainWidgets};
use crate::ui::platform::set_always_on_top;

/// Seconds a transient status message stays visible.
const STATUS_SECS: f64 = 2.5;

pub struct AppState {
    pub controller: EditorController,
    pub buffer: TextBuffer,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub auto_capture_check: CheckButton,
    pub pin_check: CheckButton,
    pub counts: CountLabels,
    pub status_frame: Frame,
    pub sender: Sender<Message>,
    /// Stamp for the pending status-clear timeout; stale clears are dropped.
    status_epoch: u64,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        Self {
            controller: EditorController::new(),
            buffer: widgets.buffer,
            editor: widgets.text_editor,
            window: widgets.wind,
            menu: widgets.menu,
            auto_capture_check: widgets.auto_capture_check,
            pin_check: widgets.pin_check,
            counts: widgets.counts,
            status_frame: widgets.status_frame,
            sender,
            status_epoch: 0,
        }
    }

    /// Arm the first poll tick for the capture the controller starts with.
    pub fn start_initial_poll(&mut self) {
        if let Some(handle) = self.controller.poll_handle() {
            self.schedule_tick(handle);
        }
    }

    // --- Buffer & metrics ---

    /// The widget buffer changed (keystroke, paste, programmatic replace):
    /// feed the new content to the controller and refresh the panel.
    pub fn sync_from_widget(&mut self) {
        let text = buffer_text_no_leak(&self.buffer);
        let metrics = self.controller.on_text_edited(&text);
        self.update_labels(metrics);
    }

    fn update_labels(&mut self, m: Metrics) {
        self.counts.update(m);
    }

    // --- Clipboard capture ---

    fn schedule_tick(&self, handle: PollHandle) {
        let s = self.sender;
        app::add_timeout3(POLL_INTERVAL_SECS, move |_| {
            s.send(Message::ClipboardTick(handle));
        });
    }

    pub fn on_clipboard_tick(&mut self, handle: PollHandle, clipboard: &mut dyn ClipboardRead) {
        match self.controller.poll_clipboard(handle, clipboard) {
            TickOutcome::Replaced(metrics) => {
                self.buffer.set_text(self.controller.text());
                self.update_labels(metrics);
                self.schedule_tick(handle);
            }
            TickOutcome::Unchanged => self.schedule_tick(handle),
            TickOutcome::Stopped => {}
        }
    }

    /// Toggle auto capture from the menu item or the check button.
    pub fn toggle_auto_capture(&mut self) {
        let enabled = !self.controller.is_capture_enabled();
        if let Some(handle) = self.controller.set_auto_capture(enabled) {
            self.schedule_tick(handle);
        }
        self.auto_capture_check.set_checked(enabled);
        self.update_menu_checkbox("Tools/Auto Clipboard Capture", enabled);
        if enabled {
            self.show_status("Auto clipboard capture on");
        } else {
            self.show_status("Auto clipboard capture off");
        }
    }

    /// The editor gained manual-edit focus. Edge-triggered: capture turns
    /// off once so a stale tick can't overwrite what the user is typing.
    pub fn on_editor_focused(&mut self) {
        // A Focus message can be stale by the time it is dispatched (the
        // startup focus handoff lands on the Clear button); only act when
        // the editor still owns keyboard focus.
        let editor_has_focus = app::focus()
            .map(|w| w.as_widget_ptr() == self.editor.as_widget_ptr())
            .unwrap_or(false);
        if !editor_has_focus {
            return;
        }
        if self.controller.on_editor_focused() {
            self.auto_capture_check.set_checked(false);
            self.update_menu_checkbox("Tools/Auto Clipboard Capture", false);
            self.show_status("Auto capture paused while editing");
        }
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        let Some(path) = native_open_dialog("*.txt") else {
            return;
        };
        match self.controller.load_file(Path::new(&path)) {
            Ok(metrics) => {
                self.buffer.set_text(self.controller.text());
                self.update_labels(metrics);
                self.show_status(&format!("Loaded {}", path));
            }
            Err(e) => {
                log::error!("failed to open {}: {}", path, e);
                dialog::alert_default(&format!("Error opening file: {}", e));
            }
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog("*.txt") else {
            return;
        };
        match self.controller.save_file(Path::new(&path)) {
            Ok(()) => self.show_status(&format!("Saved {}", path)),
            Err(e) => {
                log::error!("failed to save {}: {}", path, e);
                dialog::alert_default(&format!("Error saving file: {}", e));
            }
        }
    }

    // --- Tools ---

    pub fn clear_text(&mut self) {
        let metrics = self.controller.clear();
        self.buffer.set_text("");
        self.update_labels(metrics);
        self.show_status("Text cleared");
    }

    pub fn toggle_pin(&mut self) {
        let pinned = !self.controller.is_pinned();
        self.controller.toggle_pin(pinned);
        self.pin_check.set_checked(pinned);
        self.update_menu_checkbox("Tools/Always on Top", pinned);
        if set_always_on_top(&self.window, pinned) {
            if pinned {
                self.show_status("Window pinned on top");
            } else {
                self.show_status("Window unpinned");
            }
        } else {
            self.show_status("Always on top is not supported by this window system");
        }
    }

    // --- Format ---

    pub fn set_font(&mut self, font: Font) {
        self.editor.set_text_font(font);
        self.editor.redraw();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.editor.set_text_size(size);
        self.editor.redraw();
    }

    // --- Status line ---

    pub fn show_status(&mut self, message: &str) {
        self.status_epoch += 1;
        let epoch = self.status_epoch;
        self.status_frame.set_label(message);
        let s = self.sender;
        app::add_timeout3(STATUS_SECS, move |_| {
            s.send(Message::ClearStatus(epoch));
        });
    }

    pub fn clear_status(&mut self, epoch: u64) {
        if epoch == self.status_epoch {
            self.status_frame.set_label("");
        }
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
