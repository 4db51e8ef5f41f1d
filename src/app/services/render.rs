use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::app::domain::color_scheme::ColorScheme;
use crate::app::domain::language::Language;
use crate::app::infrastructure::error::{AppError, Result};

/// CSS class style shared by the span generator and the stylesheet, so the
/// generated rules match the generated markup.
const STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Page-level rules emitted ahead of the theme stylesheet. The
/// `.code-container` background is fixed; the rest styles the line-number
/// gutter table.
const PAGE_CSS: &str = "\
.code-container {
    background-color: white;
}
.code-table {
    border-spacing: 0;
}
.code-table td {
    vertical-align: top;
}
.code-table td.linenos pre {
    text-align: right;
    padding-right: 8px;
    color: #888888;
}
pre {
    margin: 0;
}";

/// Renders code into a self-contained HTML document: classed spans from
/// syntect, an optional line-number gutter, and the theme's stylesheet
/// inlined in the head.
pub struct HtmlRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    scheme: ColorScheme,
    line_numbers: bool,
}

impl HtmlRenderer {
    pub fn new(scheme: ColorScheme, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            scheme,
            line_numbers,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    pub fn set_line_numbers(&mut self, on: bool) {
        self.line_numbers = on;
    }

    /// Render a complete standalone HTML document for the given code.
    /// Deterministic for identical code, language and renderer settings.
    pub fn render_document(&self, code: &str, language: Language) -> Result<String> {
        let markup = self.highlight(code, language)?;
        let css = self.style_defs()?;
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{PAGE_CSS}\n{css}</style>\n</head>\n\
             <body>\n<div class=\"code-container\">\n{markup}\n</div>\n</body>\n</html>\n"
        ))
    }

    fn highlight(&self, code: &str, language: Language) -> Result<String> {
        // Defense in depth behind the Language enum: if syntect's default
        // set ever lacks the token, fail closed instead of panicking
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language.syntect_token())
            .ok_or_else(|| AppError::UnsupportedLanguage(language.tag().to_string()))?;

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, STYLE);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        let spans = generator.finalize();

        if self.line_numbers {
            Ok(wrap_with_gutter(code, &spans))
        } else {
            Ok(format!("<pre class=\"hl-code\">{spans}</pre>"))
        }
    }

    fn style_defs(&self) -> Result<String> {
        let theme = &self.theme_set.themes[self.scheme.theme_key()];
        Ok(css_for_theme_with_class_style(theme, STYLE)?)
    }
}

/// Two-cell table: line-number gutter on the left, highlighted code on the
/// right.
fn wrap_with_gutter(code: &str, spans: &str) -> String {
    let line_count = code.lines().count().max(1);
    let mut numbers = String::new();
    for n in 1..=line_count {
        numbers.push_str(&n.to_string());
        if n < line_count {
            numbers.push('\n');
        }
    }
    format!(
        "<table class=\"code-table\"><tbody><tr>\
         <td class=\"linenos\"><pre>{numbers}</pre></td>\
         <td class=\"code\"><pre class=\"hl-code\">{spans}</pre></td>\
         </tr></tbody></table>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(ColorScheme::InspiredGitHub, true)
    }

    #[test]
    fn test_document_has_single_container_and_style_block() {
        let html = renderer()
            .render_document("print('hi')", Language::Python)
            .unwrap();
        assert!(!html.is_empty());
        assert_eq!(html.matches("<div class=\"code-container\">").count(), 1);
        assert_eq!(html.matches("<style>").count(), 1);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_document_is_deterministic() {
        let r = renderer();
        let a = r.render_document("x = 1", Language::Python).unwrap();
        let b = r.render_document("x = 1", Language::Python).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_number_gutter() {
        let html = renderer()
            .render_document("a = 1\nb = 2\nc = 3", Language::Python)
            .unwrap();
        assert!(html.contains("<td class=\"linenos\">"));
        assert!(html.contains("1\n2\n3"));
    }

    #[test]
    fn test_no_gutter_when_disabled() {
        let r = HtmlRenderer::new(ColorScheme::InspiredGitHub, false);
        let html = r.render_document("a = 1", Language::Python).unwrap();
        assert!(!html.contains("code-table"));
        assert!(html.contains("<pre class=\"hl-code\">"));
    }

    #[test]
    fn test_all_languages_render() {
        let r = renderer();
        for lang in Language::all() {
            let html = r.render_document("x", *lang).unwrap();
            assert!(html.contains("code-container"), "{} failed", lang.tag());
        }
    }

    #[test]
    fn test_scheme_changes_stylesheet() {
        let mut r = renderer();
        let light = r.render_document("x = 1", Language::Python).unwrap();
        r.set_scheme(ColorScheme::SolarizedDark);
        let dark = r.render_document("x = 1", Language::Python).unwrap();
        assert_ne!(light, dark);
    }

    #[test]
    fn test_code_is_html_escaped() {
        let html = renderer()
            .render_document("if a < b: print(\"<&>\")", Language::Python)
            .unwrap();
        assert!(html.contains("&lt;"));
        assert!(!html.contains("print(\"<&>\")"));
    }

    #[test]
    fn test_fixed_background_rule_present() {
        let html = renderer().render_document("x = 1", Language::Python).unwrap();
        assert!(html.contains("background-color: white"));
    }
}
