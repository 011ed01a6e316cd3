//! Trait definition for pluggable source backends.
//!
//! Each search backend (DuckDuckGo, Bing, Brave) implements
//! [`SourceAdapter`] to provide a uniform interface for querying and
//! parsing raw results.

use crate::config::ResearchConfig;
use crate::error::SearchError;
use crate::types::{SearchResult, SourceId};

/// A pluggable search backend.
///
/// Implementors scrape a specific backend's HTML response and extract
/// structured [`SearchResult`] values. Each adapter handles its own:
///
/// - URL construction with query encoding
/// - HTTP request with appropriate headers and a bounded timeout
/// - HTML parsing via CSS selectors
/// - Error handling for rate limiting, bot detection, or parse failures
///
/// Failures are returned as typed [`SearchError`] values; the
/// orchestrator isolates them, so an adapter error never escapes a
/// search call. All implementations must be `Send + Sync` for concurrent
/// source queries.
pub trait SourceAdapter: Send + Sync {
    /// Perform a web search and return parsed results.
    ///
    /// The query need not be URL-safe; the implementation handles
    /// encoding. `config.max_results` bounds the number of results
    /// parsed out of the response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the response
    /// cannot be parsed, or the backend is rate-limiting/blocking requests.
    fn fetch(
        &self,
        query: &str,
        config: &ResearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Returns which [`SourceId`] variant this adapter represents.
    fn source_id(&self) -> SourceId;
}
