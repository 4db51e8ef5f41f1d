use super::color_scheme::ColorScheme;
use super::language::Language;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // File
    OpenSource,
    SaveHtml,
    ClearBuffer,
    Quit,

    // Convert
    ConvertToHtml,
    CopyHtml,
    PreviewInBrowser,

    // Options
    SetLanguage(Language),
    SetColorScheme(ColorScheme),
    ToggleLineNumbers,
    ToggleWordWrap,
    ToggleDarkMode,

    // Help
    ShowAbout,
}
