use fltk::enums::Font;

use super::clipboard::PollHandle;

/// All messages that can be sent through the FLTK channel.
/// Each menu/button callback sends one of these; the dispatch loop in main
/// handles them. Timer callbacks send messages too, so every buffer mutation
/// is serialized onto the UI event thread.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // File
    FileOpen,
    FileSaveAs,
    FileQuit,

    // Tools
    ClearText,
    ToggleAutoCapture,
    TogglePin,

    // Format
    SetFont(Font),
    SetFontSize(i32),

    // Help
    ShowManual,
    ShowAbout,

    // Buffer & polling
    BufferModified,
    EditorFocused,
    ClipboardTick(PollHandle),
    ClearStatus(u64),
}
