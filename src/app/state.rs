use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{
    app, dialog,
    button::Button,
    menu::{Choice, MenuBar},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::domain::color_scheme::ColorScheme;
use super::domain::language::Language;
use super::domain::session::{ConvertOutcome, Session};
use super::domain::settings::{AppSettings, ThemeMode};
use super::file_filters;
use super::infrastructure::buffer::read_buffer_text;
use super::infrastructure::error::AppError;
use super::services::render::HtmlRenderer;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;

/// Main application coordinator: owns the widgets, the session and the
/// renderer, and handles one method per dispatched `Message`.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub language_choice: Choice,
    pub scheme_choice: Choice,
    pub convert_btn: Button,
    pub copy_btn: Button,
    pub save_btn: Button,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    pub session: Session,
    pub renderer: HtmlRenderer,
    /// Last directory used in a file open/save dialog.
    pub last_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: Rc<RefCell<AppSettings>>, dark_mode: bool) -> Self {
        let (scheme, line_numbers, word_wrap) = {
            let s = settings.borrow();
            (s.color_scheme, s.line_numbers_enabled, s.word_wrap_enabled)
        };
        let renderer = HtmlRenderer::new(scheme, line_numbers);

        let mut state = Self {
            window: widgets.wind,
            menu: widgets.menu,
            editor: widgets.text_editor,
            buffer: widgets.text_buffer,
            language_choice: widgets.language_choice,
            scheme_choice: widgets.scheme_choice,
            convert_btn: widgets.convert_btn,
            copy_btn: widgets.copy_btn,
            save_btn: widgets.save_btn,
            settings,
            dark_mode,
            session: Session::new(),
            renderer,
            last_directory: None,
        };

        state
            .editor
            .set_linenumber_width(if line_numbers { 40 } else { 0 });
        let wrap = if word_wrap { WrapMode::AtBounds } else { WrapMode::None };
        state.editor.wrap_mode(wrap, 0);
        apply_theme(&mut state.editor, &mut state.window, &mut state.menu, dark_mode);

        state
    }

    /// Convert the editor buffer into the HTML artifact.
    pub fn convert_to_html(&mut self) {
        let buffer = read_buffer_text(&self.buffer);
        let tag = self.selected_language().tag();
        match self.session.convert(&buffer, tag, &self.renderer) {
            Ok(ConvertOutcome::Rendered) => self.update_artifact_buttons(),
            Ok(ConvertOutcome::EmptyBuffer) => {}
            Err(e) => dialog::alert_default(&e.to_string()),
        }
    }

    /// Put the artifact on the clipboard.
    pub fn copy_html(&mut self) {
        match self.session.artifact_for_copy() {
            Ok(html) => {
                app::copy(html);
                dialog::message_default("HTML copied to clipboard.");
            }
            Err(e) => dialog::alert_default(&e.to_string()),
        }
    }

    /// Pick a path and write the artifact to it.
    pub fn save_html(&mut self) {
        if !self.session.has_artifact() {
            dialog::alert_default(&AppError::NothingToSave.to_string());
            return;
        }

        let dir = self.dialog_dir();
        let Some(path) = native_save_dialog(file_filters::html_filter(), &dir) else {
            return;
        };
        let path = ensure_html_extension(path);

        match self.session.save_artifact(Path::new(&path)) {
            Ok(()) => self.remember_directory(&path),
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    /// Write the artifact to a temp file and open it in the default
    /// browser.
    pub fn preview_in_browser(&mut self) {
        let Some(html) = self.session.artifact() else {
            dialog::alert_default("Nothing to preview yet - convert some code first");
            return;
        };

        match write_preview_file(html) {
            Ok(path) => {
                if let Err(e) = open::that(&path) {
                    dialog::alert_default(&format!("Error opening browser: {}", e));
                }
            }
            Err(e) => dialog::alert_default(&format!("Error writing preview file: {}", e)),
        }
    }

    /// Load a source file into the editor buffer, auto-selecting the
    /// language from the extension when it maps to one.
    pub fn open_source(&mut self) {
        let dir = self.dialog_dir();
        let Some(path) = native_open_dialog(&file_filters::source_files_filter(), &dir) else {
            return;
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                self.buffer.set_text(&content);
                if let Some(lang) = Path::new(&path)
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(Language::from_extension)
                {
                    self.select_language(lang);
                }
                self.remember_directory(&path);
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.set_text("");
    }

    pub fn set_language(&mut self, lang: Language) {
        self.settings.borrow_mut().default_language = lang;
        self.persist_settings();
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        // Takes effect on the next conversion; the stored artifact is not
        // regenerated
        self.renderer.set_scheme(scheme);
        self.settings.borrow_mut().color_scheme = scheme;
        self.persist_settings();
    }

    pub fn toggle_line_numbers(&mut self) {
        let enabled = {
            let mut s = self.settings.borrow_mut();
            s.line_numbers_enabled = !s.line_numbers_enabled;
            s.line_numbers_enabled
        };
        self.renderer.set_line_numbers(enabled);
        self.editor.set_linenumber_width(if enabled { 40 } else { 0 });
        self.editor.redraw();
        self.persist_settings();
    }

    pub fn toggle_word_wrap(&mut self) {
        let enabled = {
            let mut s = self.settings.borrow_mut();
            s.word_wrap_enabled = !s.word_wrap_enabled;
            s.word_wrap_enabled
        };
        let wrap = if enabled { WrapMode::AtBounds } else { WrapMode::None };
        self.editor.wrap_mode(wrap, 0);
        self.editor.redraw();
        self.persist_settings();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(&mut self.editor, &mut self.window, &mut self.menu, self.dark_mode);
        self.settings.borrow_mut().theme_mode = if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        self.persist_settings();
    }

    pub fn quit(&mut self) {
        self.persist_settings();
        app::quit();
    }

    fn selected_language(&self) -> Language {
        usize::try_from(self.language_choice.value())
            .ok()
            .and_then(|i| Language::all().get(i).copied())
            .unwrap_or_else(|| self.settings.borrow().default_language)
    }

    fn select_language(&mut self, lang: Language) {
        if let Some(idx) = Language::all().iter().position(|l| *l == lang) {
            self.language_choice.set_value(idx as i32);
        }
        self.set_language(lang);
    }

    fn update_artifact_buttons(&mut self) {
        if self.session.has_artifact() {
            self.copy_btn.activate();
            self.save_btn.activate();
        } else {
            self.copy_btn.deactivate();
            self.save_btn.deactivate();
        }
    }

    fn remember_directory(&mut self, path: &str) {
        self.last_directory = Path::new(path)
            .parent()
            .map(|p| p.to_string_lossy().to_string());
    }

    fn dialog_dir(&self) -> String {
        self.last_directory.clone().unwrap_or_else(|| ".".to_string())
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.borrow().save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

/// Append ".html" when the chosen path carries no extension; FLTK's save
/// chooser doesn't add a default one.
fn ensure_html_extension(path: String) -> String {
    if Path::new(&path).extension().is_some() {
        path
    } else {
        format!("{}.html", path)
    }
}

/// Write the artifact where the browser can load it.
fn write_preview_file(html: &str) -> std::io::Result<PathBuf> {
    let dir = env::temp_dir().join("codetint");
    fs::create_dir_all(&dir)?;
    let path = dir.join("preview.html");
    fs::write(&path, html)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_html_extension_appends() {
        assert_eq!(
            ensure_html_extension("/tmp/snippet".to_string()),
            "/tmp/snippet.html"
        );
    }

    #[test]
    fn test_ensure_html_extension_keeps_existing() {
        assert_eq!(
            ensure_html_extension("/tmp/snippet.htm".to_string()),
            "/tmp/snippet.htm"
        );
        assert_eq!(
            ensure_html_extension("/tmp/snippet.html".to_string()),
            "/tmp/snippet.html"
        );
    }

    #[test]
    fn test_write_preview_file_round_trip() {
        let path = write_preview_file("<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
        let _ = std::fs::remove_file(path);
    }
}
