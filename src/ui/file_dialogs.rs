use fltk::dialog;

pub fn native_open_dialog(filter: &str, dir: &str) -> Option<String> {
    dialog::file_chooser("Open Source File", filter, dir, false)
}

pub fn native_save_dialog(filter: &str, dir: &str) -> Option<String> {
    dialog::file_chooser("Save HTML As", filter, dir, false)
}
