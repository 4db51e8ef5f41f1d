use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use code_tint::app::domain::messages::Message;
use code_tint::app::domain::settings::{AppSettings, ThemeMode};
use code_tint::app::infrastructure::platform::detect_system_dark_mode;
use code_tint::app::state::AppState;
use code_tint::ui::dialogs::show_about_dialog;
use code_tint::ui::main_window::build_main_window;
use code_tint::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let dark_mode = match settings.borrow().theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender, &settings.borrow());
    build_menu(&mut widgets.menu, &sender, &settings.borrow(), dark_mode);

    let mut state = AppState::new(widgets, Rc::clone(&settings), dark_mode);
    state.window.show();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::OpenSource => state.open_source(),
                Message::SaveHtml => state.save_html(),
                Message::ClearBuffer => state.clear_buffer(),
                Message::Quit => state.quit(),

                Message::ConvertToHtml => state.convert_to_html(),
                Message::CopyHtml => state.copy_html(),
                Message::PreviewInBrowser => state.preview_in_browser(),

                Message::SetLanguage(lang) => state.set_language(lang),
                Message::SetColorScheme(scheme) => state.set_color_scheme(scheme),
                Message::ToggleLineNumbers => state.toggle_line_numbers(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),

                Message::ShowAbout => show_about_dialog(),
            }
        }
    }
}
