use fltk::{
    app::Sender,
    button::{Button, CheckButton},
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::metrics::Metrics;

const COUNT_ROW_HEIGHT: i32 = 24;

/// Value labels of the counts panel, one frame per metric.
pub struct CountLabels {
    pub chars_with_spaces: Frame,
    pub chars_without_newlines: Frame,
    pub chars_without_spaces: Frame,
    pub line_count: Frame,
    pub bytes_utf8: Frame,
    pub bytes_utf16: Frame,
    pub manuscript_pages: Frame,
}

impl CountLabels {
    pub fn update(&mut self, m: Metrics) {
        self.chars_with_spaces.set_label(&m.chars_with_spaces.to_string());
        self.chars_without_newlines
            .set_label(&m.chars_without_newlines.to_string());
        self.chars_without_spaces
            .set_label(&m.chars_without_spaces.to_string());
        self.line_count.set_label(&m.line_count.to_string());
        self.bytes_utf8.set_label(&m.bytes_utf8.to_string());
        self.bytes_utf16.set_label(&m.bytes_utf16.to_string());
        self.manuscript_pages
            .set_label(&m.manuscript_pages.to_string());
    }
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub clear_button: Button,
    pub auto_capture_check: CheckButton,
    pub pin_check: CheckButton,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub counts: CountLabels,
    pub status_frame: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 520, 640, "CharCount");
    wind.set_xclass("CharCount");

    let mut flex = Flex::new(0, 0, 520, 640, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(0);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Controls row: clear button plus the two toggles
    let mut controls = Flex::default();
    controls.set_type(FlexType::Row);
    controls.set_margin(4);

    let mut clear_button = Button::default().with_label("Clear");
    controls.fixed(&clear_button, 70);
    let s = *sender;
    clear_button.set_callback(move |_| s.send(Message::ClearText));

    // flexible spacer pushes the toggles to the right edge
    let _spacer = Frame::default();

    let mut auto_capture_check = CheckButton::default().with_label("Auto clipboard capture");
    auto_capture_check.set_checked(true);
    controls.fixed(&auto_capture_check, 190);
    let s = *sender;
    auto_capture_check.set_callback(move |_| s.send(Message::ToggleAutoCapture));

    let mut pin_check = CheckButton::default().with_label("Always on top");
    controls.fixed(&pin_check, 130);
    let s = *sender;
    pin_check.set_callback(move |_| s.send(Message::TogglePin));

    controls.end();
    flex.fixed(&controls, 36);

    // The editor takes all remaining space
    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    // Counts panel
    let initial = Metrics::default();
    let counts = CountLabels {
        chars_with_spaces: count_row(&mut flex, "Characters", initial.chars_with_spaces),
        chars_without_newlines: count_row(
            &mut flex,
            "Characters (no newlines)",
            initial.chars_without_newlines,
        ),
        chars_without_spaces: count_row(
            &mut flex,
            "Characters (no whitespace)",
            initial.chars_without_spaces,
        ),
        line_count: count_row(&mut flex, "Lines", initial.line_count),
        bytes_utf8: count_row(&mut flex, "Bytes (UTF-8)", initial.bytes_utf8),
        bytes_utf16: count_row(&mut flex, "Bytes (UTF-16)", initial.bytes_utf16),
        manuscript_pages: count_row(
            &mut flex,
            "Manuscript pages (400 chars)",
            initial.manuscript_pages,
        ),
    };

    // Transient status line at the bottom
    let mut status_frame = Frame::default();
    status_frame.set_align(Align::Inside | Align::Left);
    status_frame.set_label_size(11);
    status_frame.set_frame(FrameType::FlatBox);
    status_frame.set_color(Color::from_rgb(240, 240, 240));
    flex.fixed(&status_frame, 22);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        clear_button,
        auto_capture_check,
        pin_check,
        text_editor,
        buffer,
        counts,
        status_frame,
    }
}

/// One row of the counts panel: name on the left, value on the right.
/// Returns the value frame so the caller can update it.
fn count_row(parent: &mut Flex, label: &str, initial: usize) -> Frame {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_margin(4);

    let mut name = Frame::default().with_label(label);
    name.set_align(Align::Inside | Align::Left);
    name.set_label_size(12);

    let mut value = Frame::default().with_label(&initial.to_string());
    value.set_align(Align::Inside | Align::Right);
    value.set_label_size(12);
    row.fixed(&value, 120);

    row.end();
    parent.fixed(&row, COUNT_ROW_HEIGHT);
    value
}
