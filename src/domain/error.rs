use std::io;

use thiserror::Error;

/// Library-wide error type for hairfit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A selection token outside its declared enumeration.
    #[error("Invalid {field} '{value}': must be one of {expected}")]
    InvalidSelection { field: &'static str, value: String, expected: String },

    /// A record-store row that does not match the expected schema.
    #[error("Malformed record on line {line}: {reason}")]
    RecordParse { line: usize, reason: String },

    /// The image-generation service rejected or failed the request.
    #[error("Image generation failed: {0}")]
    ImageService(String),

    /// Report rendering failed.
    #[error("Report rendering failed: {0}")]
    ReportRender(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
