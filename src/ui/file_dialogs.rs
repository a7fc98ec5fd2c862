use fltk::dialog;

pub fn native_open_dialog(filter: &str) -> Option<String> {
    dialog::file_chooser("Open File", filter, ".", false)
}

pub fn native_save_dialog(filter: &str) -> Option<String> {
    dialog::file_chooser("Save As", filter, ".", false)
}
