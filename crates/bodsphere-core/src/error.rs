//! Error types for the Bodsphere landing page

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Reading or writing a content file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON for `SiteContent`
    #[error("Content parse error: {0}")]
    ContentParse(#[from] serde_json::Error),

    /// Content parsed but breaks a page invariant
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Email capture rejected the address
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
