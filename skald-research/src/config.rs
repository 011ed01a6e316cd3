//! Research configuration with sensible defaults.
//!
//! [`ResearchConfig`] controls which sources are queried, the per-adapter
//! timeout, and request behaviour. Defaults are tuned for polite scraping.

use crate::error::SearchError;
use crate::types::SourceId;

/// Hard upper bound on the per-adapter request timeout, in seconds.
///
/// One slow backend must never stall the aggregate call for longer than
/// this; [`ResearchConfig::validate`] rejects anything above it.
pub const MAX_TIMEOUT_SECONDS: u64 = 15;

/// Configuration for research operations.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// Which sources to query, in registration order. Registration order
    /// is also the deduplication tie-break order, so it must be stable.
    pub sources: Vec<SourceId>,
    /// Maximum number of results per adapter and after aggregation.
    pub max_results: usize,
    /// Per-adapter HTTP request timeout in seconds (1..=15).
    pub timeout_seconds: u64,
    /// Whether to request safe-search filtering from sources that support it.
    pub safe_search: bool,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            sources: vec![SourceId::DuckDuckGo, SourceId::Bing, SourceId::Brave],
            max_results: 10,
            timeout_seconds: 10,
            safe_search: true,
            user_agent: None,
        }
    }
}

impl ResearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `sources` must not be empty
    /// - `timeout_seconds` must be in `1..=15`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.sources.is_empty() {
            return Err(SearchError::Config(
                "at least one source must be configured".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(SearchError::Config(format!(
                "timeout_seconds must be <= {MAX_TIMEOUT_SECONDS}"
            )));
        }
        Ok(())
    }
}
