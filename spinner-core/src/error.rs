/// Error types for the spinner controller
use thiserror::Error;

/// Main error type for spinner operations
#[derive(Error, Debug)]
pub enum SpinnerError {
    /// No global `window` (not running in a browser)
    #[error("no global `window` object")]
    NoWindow,

    /// The window has no document attached
    #[error("window has no `document`")]
    NoDocument,

    /// The document has no body to attach the overlay to
    #[error("document has no <body> element")]
    NoBody,

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Failed to parse the JSON config
    #[error("Failed to parse spinner config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid spinner config: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using SpinnerError
pub type Result<T> = std::result::Result<T, SpinnerError>;
