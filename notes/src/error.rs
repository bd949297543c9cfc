use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotesError>;

/// Shown next to a failed generation so the user knows what to try.
pub const GENERATION_HINT: &str =
    "Check your API key or network connection and send the message again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotesError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Error reading document: {0}")]
    Extraction(String),
    #[error("Unsupported file type '{0}': upload a .txt or .pdf file")]
    UnsupportedFormat(String),
    #[error("Model request failed: {0}")]
    Generation(String),
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Session '{0}' not found")]
    SessionNotFound(String),
    #[error("No response available to export yet")]
    NoResponseYet,
}

impl NotesError {
    /// Short machine-readable name used in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            NotesError::Config(_) => "config_error",
            NotesError::Extraction(_) => "extraction_error",
            NotesError::UnsupportedFormat(_) => "unsupported_format",
            NotesError::Generation(_) => "generation_error",
            NotesError::Validation(_) => "validation_error",
            NotesError::SessionNotFound(_) => "session_not_found",
            NotesError::NoResponseYet => "no_response",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            NotesError::Generation(_) => Some(GENERATION_HINT),
            NotesError::Extraction(_) => Some("Please try again with a different file."),
            _ => None,
        }
    }
}
