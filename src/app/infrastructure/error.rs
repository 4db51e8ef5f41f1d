use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Highlight error: {0}")]
    Highlight(#[from] syntect::Error),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Nothing to copy yet - convert some code first")]
    NothingToCopy,

    #[error("Nothing to save yet - convert some code first")]
    NothingToSave,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::UnsupportedLanguage("cobol-3000".to_string());
        assert_eq!(err.to_string(), "Unsupported language: cobol-3000");

        let err = AppError::NothingToCopy;
        assert_eq!(err.to_string(), "Nothing to copy yet - convert some code first");

        let err = AppError::NothingToSave;
        assert_eq!(err.to_string(), "Nothing to save yet - convert some code first");
    }
}
