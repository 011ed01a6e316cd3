//! Result aggregation: merge per-source results, deduplicate, cap.
//!
//! Ordering is stable and deterministic: sources are drained in
//! registration order, results within each source in returned order.
//! This is a tie-break order, not a relevance ranking.

use std::collections::HashSet;

use crate::types::{SearchResult, SourceId};

/// Merge per-source result lists into a single deduplicated sequence.
///
/// A result is admitted only if its dedup key (see [`dedup_key`]) has not
/// been seen. Results without a usable key are always admitted — a
/// missing URL is not evidence of duplication. Merging stops as soon as
/// `cap` results are held; remaining sources are not drained.
///
/// Invariants:
/// - no two admitted results share a non-empty dedup key
/// - the output length is at most `cap`, for any `cap` including 0
pub fn merge(per_source: Vec<(SourceId, Vec<SearchResult>)>, cap: usize) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<SearchResult> = Vec::new();

    'sources: for (_source, results) in per_source {
        for result in results {
            if merged.len() >= cap {
                break 'sources;
            }
            match dedup_key(&result.url) {
                Some(key) => {
                    if seen.insert(key) {
                        merged.push(result);
                    }
                }
                // Unkeyable URLs never deduplicate against each other.
                None => merged.push(result),
            }
        }
    }

    merged
}

/// Deduplication key for a result URL.
///
/// Scheme-insensitive and trailing-slash-insensitive exact comparison:
/// everything before the first `://` is dropped, trailing slashes are
/// stripped, and the remainder is compared verbatim. No further
/// canonicalisation is applied. Returns `None` for empty URLs or URLs
/// that reduce to nothing, which callers treat as always-unique.
pub fn dedup_key(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    let key = without_scheme.trim_end_matches('/');
    if key.is_empty() {
        return None;
    }
    Some(key.to_string())
}
