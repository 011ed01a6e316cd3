//! Error types for the skald-research crate.
//!
//! Adapter failures are recoverable by design: the orchestrator converts
//! them to empty result sets rather than propagating them, so the only
//! error a caller sees from a search is a configuration problem. Error
//! messages are stable strings with no query text or sensitive data.

/// Errors that can occur during web research operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to a search backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a search backend's response HTML.
    #[error("parse error: {0}")]
    Parse(String),

    /// A request exceeded its per-adapter timeout.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Invalid research configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for skald-research results.
pub type Result<T> = std::result::Result<T, SearchError>;
