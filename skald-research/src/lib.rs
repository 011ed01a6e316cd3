//! # skald-research
//!
//! Zero-configuration, embedded multi-source web research for Skald.
//!
//! This crate answers "what does the web say about X" by scraping public
//! search engines directly — no API keys, no external services, no user
//! setup. It compiles into Skald's binary as a library dependency.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo, Bing, and Brave using CSS selectors on HTML
//!   responses
//! - Queries all configured sources concurrently, merges and deduplicates
//!   results in a stable registration order
//! - Computes a domain-diversity quality score and a `verified` signal
//!   over the aggregate
//! - Graceful degradation: a failed source contributes zero results and a
//!   warning in the activity log; nothing escapes a search call except
//!   configuration errors
//! - Narrates progress to an [`ActivityLog`] a UI can mirror live
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> skald_research::Result<()> {
//! let researcher = skald_research::Researcher::new(Default::default());
//! let report = researcher.deep_search("rust borrow checker").await?;
//! let summary = researcher.summarize_results(&report);
//! println!("{} results, quality {}/10", summary.found, summary.quality);
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod http;
pub mod researcher;
pub mod source;
pub mod sources;
pub mod types;
pub mod verify;

pub use activity::{ActivityEntry, ActivityLevel, ActivityLog, ActivitySink};
pub use config::ResearchConfig;
pub use error::{Result, SearchError};
pub use researcher::{Researcher, DEEP_RESULT_LIMIT, QUICK_RESULT_LIMIT};
pub use source::SourceAdapter;
pub use types::{
    ClaimCheck, QualityReport, ResearchSummary, ResultExcerpt, SearchReport, SearchResult,
    SourceId, Verification,
};
