//! Domain-diversity scoring over an aggregated result set.
//!
//! The score is a deliberately crude corroboration heuristic: it counts
//! distinct result-hosting domains, saturating at 5, and flags the set
//! as verified once 3 distinct domains agree. It says nothing about
//! factual accuracy. The thresholds (3, 5, step of 2) are frozen —
//! existing callers depend on the exact values.

use std::collections::BTreeMap;

use crate::types::{QualityReport, SearchResult};

/// Distinct domains required for `verified = true`.
const VERIFIED_DOMAIN_THRESHOLD: usize = 3;

/// Distinct domains at which the quality score saturates at 10.
const SATURATION_DOMAIN_COUNT: usize = 5;

/// Compute a [`QualityReport`] over an aggregated result set.
///
/// For every result with a non-empty URL, the domain is the third
/// `/`-delimited segment (`https://a.com/x` → `a.com`). URLs with fewer
/// than three segments contribute to no bucket; that is the only parse
/// failure and it is swallowed, never raised.
pub fn score(results: &[SearchResult]) -> QualityReport {
    let mut domain_counts: BTreeMap<String, usize> = BTreeMap::new();

    for result in results {
        if result.url.is_empty() {
            continue;
        }
        if let Some(domain) = extract_domain(&result.url) {
            *domain_counts.entry(domain.to_string()).or_insert(0) += 1;
        }
    }

    let unique_domains = domain_counts.len();
    let quality_score = if unique_domains >= SATURATION_DOMAIN_COUNT {
        10
    } else {
        (unique_domains * 2) as u8
    };

    QualityReport {
        total_results: results.len(),
        domain_counts,
        quality_score,
        verified: unique_domains >= VERIFIED_DOMAIN_THRESHOLD,
    }
}

/// Extract the domain as the third `/`-delimited URL segment.
///
/// Returns `None` when the URL has fewer than three segments.
fn extract_domain(url: &str) -> Option<&str> {
    url.split('/').nth(2)
}
