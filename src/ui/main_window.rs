use fltk::{
    app::Sender,
    button::Button,
    enums::Color,
    frame::Frame,
    group::{Flex, FlexType},
    menu::{Choice, MenuBar},
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::color_scheme::ColorScheme;
use crate::app::domain::language::Language;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub convert_btn: Button,
    pub copy_btn: Button,
    pub save_btn: Button,
    pub language_choice: Choice,
    pub scheme_choice: Choice,
    pub text_editor: TextEditor,
    pub text_buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let mut wind = Window::new(100, 100, 760, 520, "CodeTint");
    wind.set_xclass("CodeTint");

    let mut flex = Flex::new(0, 0, 760, 520, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Toolbar: the three actions plus the two selectors
    let mut toolbar = Flex::new(0, 0, 0, 0, None);
    toolbar.set_type(FlexType::Row);
    toolbar.set_margin(4);
    toolbar.set_spacing(6);

    let mut convert_btn = Button::default().with_label("Convert to HTML");
    convert_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::ConvertToHtml)
    });
    toolbar.fixed(&convert_btn, 130);

    let mut copy_btn = Button::default().with_label("Copy HTML");
    copy_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::CopyHtml)
    });
    copy_btn.deactivate();
    toolbar.fixed(&copy_btn, 100);

    let mut save_btn = Button::default().with_label("Save HTML...");
    save_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::SaveHtml)
    });
    save_btn.deactivate();
    toolbar.fixed(&save_btn, 110);

    let lang_label = Frame::default().with_label("Language:");
    toolbar.fixed(&lang_label, 75);

    let mut language_choice = Choice::default();
    for lang in Language::all() {
        language_choice.add_choice(lang.tag());
    }
    let lang_idx = Language::all()
        .iter()
        .position(|l| *l == settings.default_language)
        .unwrap_or(0);
    language_choice.set_value(lang_idx as i32);
    language_choice.set_callback({
        let s = *sender;
        move |c| {
            if let Some(lang) = usize::try_from(c.value())
                .ok()
                .and_then(|i| Language::all().get(i))
            {
                s.send(Message::SetLanguage(*lang));
            }
        }
    });
    toolbar.fixed(&language_choice, 110);

    let scheme_label = Frame::default().with_label("Scheme:");
    toolbar.fixed(&scheme_label, 65);

    let mut scheme_choice = Choice::default();
    for scheme in ColorScheme::all() {
        scheme_choice.add_choice(scheme.display_name());
    }
    let scheme_idx = ColorScheme::all()
        .iter()
        .position(|c| *c == settings.color_scheme)
        .unwrap_or(0);
    scheme_choice.set_value(scheme_idx as i32);
    scheme_choice.set_callback({
        let s = *sender;
        move |c| {
            if let Some(scheme) = usize::try_from(c.value())
                .ok()
                .and_then(|i| ColorScheme::all().get(i))
            {
                s.send(Message::SetColorScheme(*scheme));
            }
        }
    });
    // Flexible: the scheme choice absorbs leftover toolbar width

    toolbar.end();
    flex.fixed(&toolbar, 40);

    let text_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(text_buffer.clone());
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        convert_btn,
        copy_btn,
        save_btn,
        language_choice,
        scheme_choice,
        text_editor,
        text_buffer,
    }
}
