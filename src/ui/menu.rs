use fltk::{
    app::Sender,
    enums::{Font, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save As...", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Tools
    menu.add("Tools/Clear Text", Shortcut::Ctrl | Shortcut::Shift | 'd', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearText) });
    // capture starts enabled, so the toggle starts checked
    menu.add("Tools/Auto Clipboard Capture", Shortcut::Ctrl | Shortcut::Shift | 'b', MenuFlag::Toggle | MenuFlag::Value, { let s = *s; move |_| s.send(Message::ToggleAutoCapture) });
    menu.add("Tools/Always on Top", Shortcut::Ctrl | Shortcut::Shift | 't', MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::TogglePin) });

    // Format
    menu.add("Format/Font/Screen (Bold)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFont(Font::ScreenBold)) });
    menu.add("Format/Font/Courier", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFont(Font::Courier)) });
    menu.add("Format/Font/Helvetica Mono", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFont(Font::Screen)) });
    menu.add("Format/Font Size/Small (12)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(12)) });
    menu.add("Format/Font Size/Medium (16)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(16)) });
    menu.add("Format/Font Size/Large (20)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(20)) });

    // Help
    menu.add("Help/Manual", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowManual) });
    menu.add("Help/About CharCount", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
