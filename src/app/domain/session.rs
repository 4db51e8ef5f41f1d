use std::fs;
use std::path::Path;

use super::language::Language;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::render::HtmlRenderer;

/// Outcome of a conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// A new artifact was produced and stored.
    Rendered,
    /// The buffer was empty after trimming; nothing happened.
    EmptyBuffer,
}

/// The one piece of session state: the HTML document produced by the most
/// recent successful conversion. Convert replaces it; copy, save and
/// preview read it. No other state survives between operations.
#[derive(Default)]
pub struct Session {
    artifact: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }

    /// Convert the buffer into a standalone HTML document and store it as
    /// the current artifact.
    ///
    /// An empty buffer is a no-op, checked before the language tag is even
    /// looked at. An unknown tag fails without touching a previously stored
    /// artifact. The buffer is stripped of surrounding whitespace before
    /// highlighting.
    pub fn convert(
        &mut self,
        buffer: &str,
        tag: &str,
        renderer: &HtmlRenderer,
    ) -> Result<ConvertOutcome> {
        let code = buffer.trim();
        if code.is_empty() {
            return Ok(ConvertOutcome::EmptyBuffer);
        }

        let language = Language::from_tag(tag)
            .ok_or_else(|| AppError::UnsupportedLanguage(tag.to_string()))?;

        let html = renderer.render_document(code, language)?;
        self.artifact = Some(html);
        Ok(ConvertOutcome::Rendered)
    }

    /// The artifact for a clipboard write, or NothingToCopy before the
    /// first successful conversion.
    pub fn artifact_for_copy(&self) -> Result<&str> {
        self.artifact.as_deref().ok_or(AppError::NothingToCopy)
    }

    /// Write the artifact to `path` as UTF-8, overwriting any existing
    /// file. Saving without an artifact is an explicit error, not a silent
    /// no-op.
    pub fn save_artifact(&self, path: &Path) -> Result<()> {
        let html = self.artifact.as_deref().ok_or(AppError::NothingToSave)?;
        fs::write(path, html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::color_scheme::ColorScheme;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(ColorScheme::default(), true)
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut session = Session::new();
        let outcome = session.convert("", "python", &renderer()).unwrap();
        assert_eq!(outcome, ConvertOutcome::EmptyBuffer);
        assert!(!session.has_artifact());
    }

    #[test]
    fn test_whitespace_only_buffer_is_noop() {
        let mut session = Session::new();
        let outcome = session.convert("  \n\t  \n", "python", &renderer()).unwrap();
        assert_eq!(outcome, ConvertOutcome::EmptyBuffer);
        assert!(!session.has_artifact());
    }

    #[test]
    fn test_empty_buffer_skips_language_validation() {
        // Matches the original control flow: the emptiness check comes
        // before the tag is resolved
        let mut session = Session::new();
        let outcome = session.convert("", "cobol-3000", &renderer()).unwrap();
        assert_eq!(outcome, ConvertOutcome::EmptyBuffer);
    }

    #[test]
    fn test_convert_produces_artifact() {
        let mut session = Session::new();
        let outcome = session
            .convert("print('hello')", "python", &renderer())
            .unwrap();
        assert_eq!(outcome, ConvertOutcome::Rendered);
        assert!(session.has_artifact());
        assert!(session.artifact().unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_copy_before_convert_fails() {
        let session = Session::new();
        let err = session.artifact_for_copy().unwrap_err();
        assert!(matches!(err, AppError::NothingToCopy));
    }

    #[test]
    fn test_copy_after_convert_returns_artifact() {
        let mut session = Session::new();
        session.convert("x = 1", "python", &renderer()).unwrap();
        let copied = session.artifact_for_copy().unwrap();
        assert_eq!(copied, session.artifact().unwrap());
    }

    #[test]
    fn test_save_before_convert_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let session = Session::new();
        let err = session.save_artifact(&path).unwrap_err();
        assert!(matches!(err, AppError::NothingToSave));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let mut session = Session::new();
        session.convert("x = 1", "python", &renderer()).unwrap();
        session.save_artifact(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.artifact().unwrap());
    }

    #[test]
    fn test_unknown_tag_fails_and_keeps_artifact() {
        let mut session = Session::new();
        session.convert("x = 1", "python", &renderer()).unwrap();
        let before = session.artifact().unwrap().to_string();

        let err = session
            .convert("MOVE A TO B", "cobol-3000", &renderer())
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(_)));
        assert_eq!(session.artifact().unwrap(), before);
    }

    #[test]
    fn test_reconvert_replaces_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let mut session = Session::new();

        session.convert("a = 1", "python", &renderer()).unwrap();
        let first = session.artifact().unwrap().to_string();

        session.convert("b = 2", "python", &renderer()).unwrap();
        let second = session.artifact().unwrap().to_string();
        assert_ne!(first, second);

        session.save_artifact(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), second);
    }

    #[test]
    fn test_surrounding_whitespace_is_stripped() {
        let mut session = Session::new();
        let r = renderer();
        session.convert("\n\n  x = 1  \n\n", "python", &r).unwrap();
        let padded = session.artifact().unwrap().to_string();

        session.convert("x = 1", "python", &r).unwrap();
        assert_eq!(session.artifact().unwrap(), padded);
    }
}
