//! Brave Search source — independent index.
//!
//! Brave runs its own web crawler, so its results overlap less with the
//! other sources and add genuine diversity to the aggregate.

use crate::config::ResearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::source::SourceAdapter;
use crate::types::{SearchResult, SourceId};
use scraper::{Html, Selector};

/// Brave Search HTML adapter.
pub struct BraveSource;

impl SourceAdapter for BraveSource {
    async fn fetch(
        &self,
        query: &str,
        config: &ResearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Brave search");

        let client = http::build_client(config)?;

        let safesearch_val = if config.safe_search { "strict" } else { "off" };

        let response = client
            .get("https://search.brave.com/search")
            .query(&[("q", query), ("safesearch", safesearch_val)])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Brave request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Brave HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Brave response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Brave response received");

        parse_brave_html(&html, config.max_results)
    }

    fn source_id(&self) -> SourceId {
        SourceId::Brave
    }
}

/// Parse Brave Search HTML response into search results.
///
/// Extracted as a separate function for testability with mock HTML.
fn parse_brave_html(html: &str, max_results: usize) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    // Organic web results carry data-type="web" on their snippet container
    let result_sel = Selector::parse(r#".snippet[data-type="web"]"#)
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".title")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let link_sel = Selector::parse("a[href]")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".snippet-description, .snippet-content")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }

        let title = match element.select(&title_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        // First absolute link inside the snippet is the result URL
        let url = element
            .select(&link_sel)
            .filter_map(|a| a.value().attr("href"))
            .find(|h| h.starts_with("http"))
            .map(str::to_string);

        let url = match url {
            Some(u) => u,
            None => continue,
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            source: SourceId::Brave,
        });
    }

    tracing::debug!(count = results.len(), "Brave results parsed");
    Ok(results)
}
