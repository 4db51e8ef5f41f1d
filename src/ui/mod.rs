//! UI layer - FLTK widgets, dialogs and theming.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
