use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    settings: &AppSettings,
    initial_dark_mode: bool,
) {
    let s = sender;

    // File
    menu.add("File/Open Source File...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSource) });
    menu.add("File/Save HTML As...", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveHtml) });
    menu.add("File/Clear Buffer", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearBuffer) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Convert
    menu.add("Convert/Convert to HTML", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ConvertToHtml) });
    menu.add("Convert/Copy HTML", Shortcut::Ctrl | Shortcut::Shift | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CopyHtml) });
    menu.add("Convert/Preview in Browser", Shortcut::Ctrl | 'b', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PreviewInBrowser) });

    // View
    let ln_flag = if settings.line_numbers_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Line Numbers", Shortcut::None, ln_flag, { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Word Wrap", Shortcut::None, ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Help
    menu.add("Help/About CodeTint", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
