//! Central error types for AirMouse.
//!
//! The gesture core itself is total and never fails; these errors belong to
//! the collaborators around it (screenshot capture, trace and config I/O).

use thiserror::Error;

/// Main error type for AirMouse operations.
#[derive(Error, Debug)]
pub enum AirMouseError {
    /// Screen capture failed
    #[error("Capture failed: {0}")]
    CaptureError(String),

    /// File I/O failed
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Image encoding failed
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration file missing or malformed
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for AirMouseError {
    fn from(err: image::ImageError) -> Self {
        AirMouseError::EncodingError(err.to_string())
    }
}

impl From<String> for AirMouseError {
    fn from(msg: String) -> Self {
        AirMouseError::Other(msg)
    }
}

impl From<&str> for AirMouseError {
    fn from(msg: &str) -> Self {
        AirMouseError::Other(msg.to_string())
    }
}

/// Extension trait for adding context to Results.
///
/// Similar to anyhow's `Context` trait, this allows chaining context
/// information onto errors for better debugging.
///
/// # Example
/// ```ignore
/// use airmouse_lib::error::{AirMouseResult, ResultExt};
///
/// fn load_trace() -> AirMouseResult<String> {
///     std::fs::read_to_string("trace.json").context("failed to read trace file")
/// }
/// ```
pub trait ResultExt<T> {
    /// Add context to an error, converting it to AirMouseError::Other.
    fn context(self, msg: &str) -> AirMouseResult<T>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F: FnOnce() -> String>(self, f: F) -> AirMouseResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> AirMouseResult<T> {
        self.map_err(|e| AirMouseError::Other(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> AirMouseResult<T> {
        self.map_err(|e| AirMouseError::Other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to AirMouseError::Other with the given message.
    fn context(self, msg: &str) -> AirMouseResult<T>;

    /// Convert None to AirMouseError::Other with a lazily evaluated message.
    fn with_context<F: FnOnce() -> String>(self, f: F) -> AirMouseResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> AirMouseResult<T> {
        self.ok_or_else(|| AirMouseError::Other(msg.to_string()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> AirMouseResult<T> {
        self.ok_or_else(|| AirMouseError::Other(f()))
    }
}

/// Type alias for Results using AirMouseError.
pub type AirMouseResult<T> = Result<T, AirMouseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AirMouseError::CaptureError("test".to_string());
        assert_eq!(err.to_string(), "Capture failed: test");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AirMouseError = io_err.into();
        assert!(matches!(err, AirMouseError::StorageError(_)));
    }

    #[test]
    fn test_from_string() {
        let err: AirMouseError = "test error".into();
        assert!(matches!(err, AirMouseError::Other(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), &str> = Err("original error");
        let with_context = result.context("operation failed");

        assert!(matches!(with_context, Err(AirMouseError::Other(_))));
        let msg = with_context.unwrap_err().to_string();
        assert!(msg.contains("operation failed"));
        assert!(msg.contains("original error"));
    }

    #[test]
    fn test_result_ext_ok_passthrough() {
        let result: Result<i32, &str> = Ok(42);
        let with_context = result.context("should not appear");

        assert_eq!(with_context.unwrap(), 42);
    }

    #[test]
    fn test_option_ext_context() {
        let opt: Option<i32> = None;
        let result = opt.context("value was missing");

        assert!(matches!(result, Err(AirMouseError::Other(_))));
        assert!(result.unwrap_err().to_string().contains("value was missing"));
    }

    #[test]
    fn test_option_ext_with_context() {
        let opt: Option<i32> = None;
        let result = opt.with_context(|| format!("missing value at index {}", 5));

        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("missing value at index 5"));
    }
}
