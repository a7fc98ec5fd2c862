use fltk::{
    app,
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

/// Show the usage window
pub fn show_manual_dialog() {
    let mut dialog = Window::default()
        .with_size(480, 400)
        .with_label("How to use CharCount")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 460, 380, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("How to use");
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 30);

    let body = "Counting\n\
        Type or paste text into the box and every count updates live:\n\
        characters, characters without newlines or whitespace, lines,\n\
        byte sizes and 400-character manuscript pages.\n\n\
        Auto clipboard capture\n\
        While the checkbox is on, CharCount reads the clipboard twice a\n\
        second and shows whatever text you copy anywhere on your system.\n\
        Clicking into the text box pauses capture so a late clipboard\n\
        read cannot overwrite your edits; tick the box to resume.\n\n\
        Files\n\
        File > Open loads a text file into the counter.\n\
        File > Save As writes the current text back out.\n\n\
        Window\n\
        \"Always on top\" keeps the counter above other windows, where\n\
        the window system allows it.";

    let mut body_frame = Frame::default();
    body_frame.set_label(body);
    body_frame.set_label_size(12);
    body_frame.set_align(Align::Inside | Align::Left | Align::Top);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    while dialog.shown() {
        app::wait();
    }
}
