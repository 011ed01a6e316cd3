//! Research orchestrator: fan out to sources, merge, score, summarise.
//!
//! [`Researcher`] is the public entry point. It queries every configured
//! source concurrently, isolates per-source failures, deduplicates the
//! merged results, and optionally attaches a domain-diversity analysis.
//! Progress is narrated to the owned [`ActivityLog`].

use crate::activity::{ActivityLevel, ActivityLog, ActivitySink};
use crate::aggregate;
use crate::config::ResearchConfig;
use crate::error::Result;
use crate::source::SourceAdapter;
use crate::sources::{BingSource, BraveSource, DuckDuckGoSource};
use crate::types::{
    ClaimCheck, ResearchSummary, ResultExcerpt, SearchReport, SearchResult, SourceId, Verification,
};
use crate::verify;

/// Result cap used by [`Researcher::quick_search`].
pub const QUICK_RESULT_LIMIT: usize = 5;

/// Result cap used by [`Researcher::deep_search`].
pub const DEEP_RESULT_LIMIT: usize = 20;

/// Number of excerpts kept in a [`ResearchSummary`].
pub const SUMMARY_TOP_RESULTS: usize = 5;

/// Maximum snippet length (in characters) in a summary excerpt.
pub const SNIPPET_EXCERPT_CHARS: usize = 200;

/// Multi-source research orchestrator.
///
/// Construct one per logical session and pass it to whoever needs to
/// run searches; there is no global instance. The owned activity log
/// accumulates across calls until [`ActivityLog::clear`] is called.
///
/// # Failure semantics
///
/// Source failures never escape a search call: a failed source
/// contributes zero results and a `warning` activity entry. A fully
/// failed search yields an empty report with `quality_score = 0` and
/// `verified = false` — a valid, reportable outcome, not an error.
/// Only an invalid [`ResearchConfig`] produces an `Err`.
pub struct Researcher {
    config: ResearchConfig,
    activity: ActivityLog,
}

impl Researcher {
    /// Create a researcher with the default tracing-backed activity sink.
    pub fn new(config: ResearchConfig) -> Self {
        Self {
            config,
            activity: ActivityLog::new(),
        }
    }

    /// Create a researcher whose activity entries go to a custom sink.
    pub fn with_sink(config: ResearchConfig, sink: Box<dyn ActivitySink>) -> Self {
        Self {
            config,
            activity: ActivityLog::with_sink(sink),
        }
    }

    /// The activity log narrating this researcher's progress.
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// The configuration this researcher was constructed with.
    pub fn config(&self) -> &ResearchConfig {
        &self.config
    }

    /// Search all configured sources and aggregate the results.
    ///
    /// When `verify` is false, no scoring work is performed and
    /// `analysis` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`](crate::error::SearchError::Config) if the configuration is invalid.
    /// Source-level failures are isolated, not returned.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
        verify: bool,
    ) -> Result<SearchReport> {
        self.config.validate()?;

        self.activity
            .log(format!("Searching for \"{query}\""), ActivityLevel::Search);

        let effective = ResearchConfig {
            max_results,
            ..self.config.clone()
        };

        // Fan out concurrently; join_all yields outcomes in input order,
        // so dedup tie-breaks stay deterministic by registration order.
        let futures: Vec<_> = effective
            .sources
            .iter()
            .map(|source| {
                let q = query.to_string();
                let cfg = effective.clone();
                let src = *source;
                async move { (src, fetch_source(src, &q, &cfg).await) }
            })
            .collect();

        let outcomes = futures::future::join_all(futures).await;

        Ok(self.assemble(query, outcomes, max_results, verify))
    }

    /// `search` with a small result cap and no verification.
    pub async fn quick_search(&self, query: &str) -> Result<SearchReport> {
        self.search(query, QUICK_RESULT_LIMIT, false).await
    }

    /// `search` with a large result cap and verification enabled.
    pub async fn deep_search(&self, query: &str) -> Result<SearchReport> {
        self.search(query, DEEP_RESULT_LIMIT, true).await
    }

    /// Condense a report into an AI-consumable summary.
    ///
    /// Keeps the top [`SUMMARY_TOP_RESULTS`] results with snippets cut to
    /// [`SNIPPET_EXCERPT_CHARS`] characters. Quality figures are copied
    /// from the report's analysis, defaulting to `0`/`false` when the
    /// report was produced without verification.
    pub fn summarize_results(&self, report: &SearchReport) -> ResearchSummary {
        let top_results = report
            .results
            .iter()
            .take(SUMMARY_TOP_RESULTS)
            .map(|r| ResultExcerpt {
                title: r.title.clone(),
                url: r.url.clone(),
                snippet: truncate_chars(&r.snippet, SNIPPET_EXCERPT_CHARS),
                source: r.source,
            })
            .collect();

        let (quality, verified) = report
            .analysis
            .as_ref()
            .map_or((0, false), |a| (a.quality_score, a.verified));

        ResearchSummary {
            query: report.query.clone(),
            found: report.results.len(),
            top_results,
            quality,
            verified,
        }
    }

    /// Check how well a claim about a topic is supported on the web.
    ///
    /// Runs a deep search over `"<topic> <claim>"` and returns the
    /// summary together with a [`Verification`] block; the corroboration
    /// figures appear in both for caller convenience.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`](crate::error::SearchError::Config) if the configuration is invalid.
    pub async fn verify_information(&self, topic: &str, claim: &str) -> Result<ClaimCheck> {
        self.activity.log(
            format!("Verifying claim about \"{topic}\""),
            ActivityLevel::Verify,
        );

        let report = self.deep_search(&format!("{topic} {claim}")).await?;
        Ok(self.build_claim_check(topic, claim, &report))
    }

    /// Assemble a report from per-source outcomes.
    ///
    /// Split out of [`search`](Self::search) so the degradation and
    /// scoring paths are testable without network access.
    fn assemble(
        &self,
        query: &str,
        outcomes: Vec<(SourceId, Result<Vec<SearchResult>>)>,
        max_results: usize,
        verify: bool,
    ) -> SearchReport {
        let sources: Vec<SourceId> = outcomes.iter().map(|(source, _)| *source).collect();

        let per_source: Vec<(SourceId, Vec<SearchResult>)> = outcomes
            .into_iter()
            .map(|(source, outcome)| match outcome {
                Ok(results) => {
                    tracing::debug!(%source, count = results.len(), "source returned results");
                    (source, results)
                }
                Err(err) => {
                    tracing::warn!(%source, error = %err, "source query failed");
                    self.activity
                        .log(format!("{source} failed: {err}"), ActivityLevel::Warning);
                    (source, Vec::new())
                }
            })
            .collect();

        let results = aggregate::merge(per_source, max_results);
        self.activity.log(
            format!("Found {} unique results", results.len()),
            ActivityLevel::Info,
        );

        let analysis = if verify {
            self.activity
                .log("Analyzing source diversity", ActivityLevel::Analyze);
            let report = verify::score(&results);
            let level = if report.verified {
                ActivityLevel::Success
            } else {
                ActivityLevel::Verify
            };
            self.activity.log(
                format!(
                    "Quality {}/10 across {} domains, verified: {}",
                    report.quality_score,
                    report.domain_counts.len(),
                    report.verified
                ),
                level,
            );
            Some(report)
        } else {
            None
        };

        SearchReport {
            query: query.to_string(),
            sources,
            results,
            analysis,
        }
    }

    /// Build the claim check for a finished deep-search report.
    fn build_claim_check(&self, topic: &str, claim: &str, report: &SearchReport) -> ClaimCheck {
        let summary = self.summarize_results(report);
        let verification = Verification {
            sources_found: report.results.len(),
            quality_score: summary.quality,
            verified: summary.verified,
        };
        ClaimCheck {
            topic: topic.to_string(),
            claim: claim.to_string(),
            summary,
            verification,
        }
    }
}

/// Query a single source, dispatching to the concrete adapter.
async fn fetch_source(
    source: SourceId,
    query: &str,
    config: &ResearchConfig,
) -> Result<Vec<SearchResult>> {
    match source {
        SourceId::DuckDuckGo => DuckDuckGoSource.fetch(query, config).await,
        SourceId::Bing => BingSource.fetch(query, config).await,
        SourceId::Brave => BraveSource.fetch(query, config).await,
    }
}

/// Truncate a string to at most `max_chars` characters.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}
