//! Error types for article-image.
//!
//! Image resolution itself never fails: a missing image is reported as an
//! empty [`ResolvedImage`](crate::ResolvedImage). Errors only arise while
//! building custom configuration or at the CLI boundary.

/// Error type for configuration and I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A custom rule pattern failed to compile.
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Reading input failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the resolved image failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A command-line argument was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
