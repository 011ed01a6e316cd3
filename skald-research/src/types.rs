//! Core types for research results, source identification, and reports.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single search result returned from a source backend.
///
/// Immutable once produced by an adapter; the aggregator moves results
/// around but never rewrites their fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The absolute URL of the result.
    pub url: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
    /// Which source backend returned this result.
    pub source: SourceId,
}

/// Search backends skald-research can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// DuckDuckGo — most scraper-friendly, HTML-only endpoint.
    DuckDuckGo,
    /// Bing — decent fallback with Microsoft's index.
    Bing,
    /// Brave Search — independent index.
    Brave,
}

impl SourceId {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
            Self::Brave => "Brave",
        }
    }

    /// Returns all available source variants.
    pub fn all() -> &'static [SourceId] {
        &[Self::DuckDuckGo, Self::Bing, Self::Brave]
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain-diversity report computed over an aggregated result set.
///
/// Recomputed from scratch on every aggregation; never mutated in place.
/// The score signals breadth of corroboration across distinct domains,
/// not factual accuracy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Number of results the report was computed over.
    pub total_results: usize,
    /// Occurrence count per result-hosting domain.
    pub domain_counts: BTreeMap<String, usize>,
    /// Diversity score in 0..=10; saturates at 5 distinct domains.
    pub quality_score: u8,
    /// True when at least 3 distinct domains corroborate the results.
    pub verified: bool,
}

/// Outcome of one orchestrated search call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// The query as given by the caller.
    pub query: String,
    /// Sources queried, in registration order.
    pub sources: Vec<SourceId>,
    /// Deduplicated results, capped at the requested maximum.
    pub results: Vec<SearchResult>,
    /// Diversity analysis; present only when verification was requested.
    pub analysis: Option<QualityReport>,
}

/// A ranked result excerpt inside a [`ResearchSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultExcerpt {
    /// The title of the result page.
    pub title: String,
    /// The absolute URL of the result.
    pub url: String,
    /// Snippet truncated for AI consumption.
    pub snippet: String,
    /// Which source backend returned this result.
    pub source: SourceId,
}

/// Condensed, AI-consumable view of a [`SearchReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSummary {
    /// The query as given by the caller.
    pub query: String,
    /// Total unique results found (before top-N trimming).
    pub found: usize,
    /// Up to five result excerpts, in aggregate order.
    pub top_results: Vec<ResultExcerpt>,
    /// Diversity score copied from the analysis (0 when absent).
    pub quality: u8,
    /// Verification flag copied from the analysis (false when absent).
    pub verified: bool,
}

/// Corroboration metrics attached to a claim check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Number of unique results the deep search found.
    pub sources_found: usize,
    /// Diversity score in 0..=10.
    pub quality_score: u8,
    /// True when domain diversity met the corroboration threshold.
    pub verified: bool,
}

/// Result of verifying a claim against a deep web search.
///
/// The verification block repeats the summary's quality figures so
/// callers that only care about the verdict can skip the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimCheck {
    /// The topic the claim is about.
    pub topic: String,
    /// The claim text that was checked.
    pub claim: String,
    /// Summary of the supporting search.
    pub summary: ResearchSummary,
    /// Corroboration metrics.
    pub verification: Verification,
}
