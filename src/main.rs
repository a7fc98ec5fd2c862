use fltk::{app, enums::Event, prelude::*};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use char_count::app::clipboard::SystemClipboard;
use char_count::app::messages::Message;
use char_count::app::state::AppState;
use char_count::ui::dialogs::about::show_about_dialog;
use char_count::ui::dialogs::manual::show_manual_dialog;
use char_count::ui::main_window::build_main_window;
use char_count::ui::menu::build_menu;

fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    // Every insert/delete in the widget buffer goes through the channel so
    // the controller recomputes on the UI thread, never concurrently with a
    // clipboard delivery.
    {
        let s = sender;
        widgets.buffer.add_modify_callback(move |_, inserted, deleted, _, _| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::BufferModified);
            }
        });
    }

    // Focus gain on the editor pauses auto capture (edge-triggered).
    {
        let s = sender;
        widgets.text_editor.handle(move |_, event| {
            if event == Event::Focus {
                s.send(Message::EditorFocused);
            }
            false
        });
    }

    let mut wind = widgets.wind.clone();
    let mut clear_button = widgets.clear_button.clone();
    let mut state = AppState::new(widgets, sender);
    let mut clipboard = SystemClipboard;

    wind.show();
    // keep the startup focus off the editor so auto capture stays on until
    // the user actually clicks into the text box
    let _ = clear_button.take_focus();
    state.start_initial_poll();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileOpen => state.file_open(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit => fltk_app.quit(),

                Message::ClearText => state.clear_text(),
                Message::ToggleAutoCapture => state.toggle_auto_capture(),
                Message::TogglePin => state.toggle_pin(),

                Message::SetFont(font) => state.set_font(font),
                Message::SetFontSize(size) => state.set_font_size(size),

                Message::ShowManual => show_manual_dialog(),
                Message::ShowAbout => show_about_dialog(),

                Message::BufferModified => state.sync_from_widget(),
                Message::EditorFocused => state.on_editor_focused(),
                Message::ClipboardTick(handle) => {
                    state.on_clipboard_tick(handle, &mut clipboard)
                }
                Message::ClearStatus(epoch) => state.clear_status(epoch),
            }
        }
    }
}
