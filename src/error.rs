//! Error types for the Toolshed library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ToolshedError`] enum.
//!
//! # Examples
//!
//! ```
//! use toolshed::error::{Result, ToolshedError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ToolshedError::invalid_argument("substring length must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Toolshed operations.
#[derive(Error, Debug)]
pub enum ToolshedError {
    /// A caller-supplied argument or configuration value is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A schema validator failed while checking data.
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ToolshedError.
pub type Result<T> = std::result::Result<T, ToolshedError>;

impl ToolshedError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ToolshedError::InvalidArgument(msg.into())
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        ToolshedError::Validation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ToolshedError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ToolshedError::invalid_argument("k must be positive");
        assert_eq!(error.to_string(), "Invalid argument: k must be positive");

        let error = ToolshedError::validation("schema blew up");
        assert_eq!(error.to_string(), "Validation error: schema blew up");

        let error = ToolshedError::other("something else");
        assert_eq!(error.to_string(), "Error: something else");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ToolshedError::from(json_error);

        match error {
            ToolshedError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = ToolshedError::from(anyhow::anyhow!("wrapped"));
        assert!(matches!(error, ToolshedError::Anyhow(_)));
        assert_eq!(error.to_string(), "Anyhow error: wrapped");
    }
}
