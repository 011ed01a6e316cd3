//! Error types for the skald tool layer.
//!
//! Each error variant carries a stable error code (SCREAMING_SNAKE_CASE)
//! that is included in the Display output and accessible via
//! [`SkaldError::code()`]. Codes are part of the public API contract and
//! will not change.

/// Stable error codes for programmatic error handling.
///
/// Use these for distinguishing errors rather than parsing Display output.
pub mod error_codes {
    /// Invalid or missing configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// Tool arguments failed validation.
    pub const TOOL_VALIDATION: &str = "TOOL_VALIDATION";

    /// Tool execution failed.
    pub const TOOL_FAILED: &str = "TOOL_FAILED";
}

/// Errors produced by the skald tool layer.
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum SkaldError {
    /// Invalid or missing configuration.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    ConfigError(String),

    /// Tool arguments failed validation.
    #[error("[{}] {}", error_codes::TOOL_VALIDATION, .0)]
    ToolValidationError(String),

    /// Tool execution failed.
    #[error("[{}] {}", error_codes::TOOL_FAILED, .0)]
    ToolExecutionError(String),
}

impl SkaldError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => error_codes::CONFIG_INVALID,
            Self::ToolValidationError(_) => error_codes::TOOL_VALIDATION,
            Self::ToolExecutionError(_) => error_codes::TOOL_FAILED,
        }
    }

    /// Returns the inner message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::ConfigError(m) | Self::ToolValidationError(m) | Self::ToolExecutionError(m) => m,
        }
    }
}

/// Convenience alias for skald results.
pub type Result<T> = std::result::Result<T, SkaldError>;
