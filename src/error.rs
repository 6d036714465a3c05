//! Error types for loading clinic directories.
//!
//! The normalization engine itself is total and has no error type: values
//! that cannot be formatted come back as `None`. Errors only arise when a
//! directory file cannot be read or parsed.

use thiserror::Error;

/// Errors that can occur while loading a clinic directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Failed to read the directory source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON document could not be parsed.
    #[cfg(feature = "directory-json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV document could not be parsed.
    #[cfg(feature = "directory-csv")]
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column was not found in the header row.
    #[error("missing required '{0}' column")]
    MissingColumn(&'static str),

    /// The document has a shape the loader does not understand.
    #[error("unsupported directory layout: {0}")]
    Layout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DirectoryError::MissingColumn("name").to_string(),
            "missing required 'name' column"
        );
        assert_eq!(
            DirectoryError::Layout("expected an object or array".into()).to_string(),
            "unsupported directory layout: expected an object or array"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: DirectoryError = io.into();
        assert!(matches!(err, DirectoryError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DirectoryError>();
    }
}
