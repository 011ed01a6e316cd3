//! Web research tool — multi-source search with optional verification.
//!
//! Wraps the [`skald_research`] crate's async orchestrator behind the
//! synchronous [`Tool`] trait interface using
//! `tokio::runtime::Handle::current().block_on()`.

use std::sync::Arc;

use skald_research::{ResearchSummary, Researcher};

use crate::error::SkaldError;

use super::types::{truncate_output, Tool, ToolMode, ToolResult, DEFAULT_MAX_BYTES};

/// Tool that researches a query across multiple search backends.
///
/// `quick` mode returns up to 5 results without analysis; `deep` mode
/// returns up to 20 and attaches the domain-diversity verification
/// signal. This is a **read-only** tool — allowed in all tool modes.
///
/// # Arguments (JSON)
///
/// - `query` (string, required) — the research query
/// - `mode` (string, optional) — `"quick"` (default) or `"deep"`
/// - `max_results` (integer, optional) — overrides the mode's result cap
pub struct WebResearchTool {
    researcher: Arc<Researcher>,
    max_bytes: usize,
}

impl WebResearchTool {
    /// Create a new `WebResearchTool` over a shared researcher.
    pub fn new(researcher: Arc<Researcher>) -> Self {
        Self {
            researcher,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl Tool for WebResearchTool {
    fn name(&self) -> &str {
        "web_research"
    }

    fn description(&self) -> &str {
        "Research a topic across multiple search engines. Deep mode verifies how many independent domains corroborate the results."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The research query"
                },
                "mode": {
                    "type": "string",
                    "enum": ["quick", "deep"],
                    "description": "quick: top 5 results, no verification; deep: top 20 with verification (default quick)"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Override the mode's maximum result count"
                }
            },
            "required": ["query"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> Result<ToolResult, SkaldError> {
        let query = args.get("query").and_then(|v| v.as_str()).ok_or_else(|| {
            SkaldError::ToolValidationError("missing required argument: query".into())
        })?;

        if query.trim().is_empty() {
            return Err(SkaldError::ToolValidationError(
                "query must not be empty".into(),
            ));
        }

        let deep = match args.get("mode").and_then(|v| v.as_str()) {
            None | Some("quick") => false,
            Some("deep") => true,
            Some(other) => {
                return Err(SkaldError::ToolValidationError(format!(
                    "unknown mode \"{other}\", expected \"quick\" or \"deep\""
                )));
            }
        };

        let max_results = args
            .get("max_results")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize);

        tracing::debug!(deep, max_results, "web_research invoked");

        // Bridge sync Tool::execute to the async orchestrator.
        let handle = tokio::runtime::Handle::current();
        let report = match max_results {
            Some(n) => handle.block_on(self.researcher.search(query, n, deep)),
            None if deep => handle.block_on(self.researcher.deep_search(query)),
            None => handle.block_on(self.researcher.quick_search(query)),
        }
        .map_err(|e| SkaldError::ToolExecutionError(format!("research failed: {e}")))?;

        let summary = self.researcher.summarize_results(&report);
        let output = format_summary(&summary, deep);

        let (truncated_output, was_truncated) = truncate_output(&output, self.max_bytes);
        if was_truncated {
            Ok(ToolResult::success_truncated(truncated_output))
        } else {
            Ok(ToolResult::success(truncated_output))
        }
    }

    fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
        true // research is read-only, allowed in all modes
    }
}

/// Format a research summary as markdown for LLM consumption.
pub(crate) fn format_summary(summary: &ResearchSummary, include_verification: bool) -> String {
    if summary.top_results.is_empty() {
        return format!("No results found for \"{}\".", summary.query);
    }

    let mut output = format!("## Research Summary for \"{}\"\n\n", summary.query);
    for (i, result) in summary.top_results.iter().enumerate() {
        output.push_str(&format!(
            "{}. **{}**\n   URL: {}\n   {}\n   Source: {}\n\n",
            i + 1,
            result.title,
            result.url,
            result.snippet,
            result.source,
        ));
    }

    output.push_str(&format!("Found {} unique results.\n", summary.found));
    if include_verification {
        output.push_str(&format!(
            "Quality: {}/10 — {}\n",
            summary.quality,
            if summary.verified {
                "corroborated by 3+ independent domains"
            } else {
                "not yet corroborated by enough independent domains"
            }
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_research::{ResultExcerpt, SourceId};

    fn make_tool() -> WebResearchTool {
        WebResearchTool::new(Arc::new(Researcher::new(Default::default())))
    }

    fn make_summary(found: usize, quality: u8, verified: bool) -> ResearchSummary {
        ResearchSummary {
            query: "rust".into(),
            found,
            top_results: (0..found.min(5))
                .map(|i| ResultExcerpt {
                    title: format!("Result {i}"),
                    url: format!("https://r{i}.com/page"),
                    snippet: format!("Snippet {i}"),
                    source: SourceId::DuckDuckGo,
                })
                .collect(),
            quality,
            verified,
        }
    }

    #[test]
    fn schema_has_required_query() {
        let tool = make_tool();
        let schema = tool.schema();
        let required = schema.get("required").and_then(|v| v.as_array());
        assert!(required.is_some());
        let required = match required {
            Some(r) => r,
            None => unreachable!("schema should have required"),
        };
        assert!(required.iter().any(|v| v.as_str() == Some("query")));
    }

    #[test]
    fn schema_has_mode_and_max_results_properties() {
        let tool = make_tool();
        let schema = tool.schema();
        let props = schema.get("properties");
        assert!(props.is_some());
        let props = match props {
            Some(p) => p,
            None => unreachable!("schema should have properties"),
        };
        assert!(props.get("query").is_some());
        assert!(props.get("mode").is_some());
        assert!(props.get("max_results").is_some());
    }

    #[test]
    fn missing_query_returns_validation_error() {
        let tool = make_tool();
        let result = tool.execute(serde_json::json!({}));
        assert!(result.is_err());
        let err = match result {
            Err(e) => e,
            Ok(_) => unreachable!("should return error for missing query"),
        };
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn empty_query_returns_validation_error() {
        let tool = make_tool();
        let result = tool.execute(serde_json::json!({"query": "   "}));
        assert!(result.is_err());
        let err = match result {
            Err(e) => e,
            Ok(_) => unreachable!("should return error for empty query"),
        };
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn unknown_mode_returns_validation_error() {
        let tool = make_tool();
        let result = tool.execute(serde_json::json!({"query": "rust", "mode": "exhaustive"}));
        assert!(result.is_err());
        let err = match result {
            Err(e) => e,
            Ok(_) => unreachable!("should reject unknown mode"),
        };
        assert!(err.to_string().contains("exhaustive"));
    }

    #[test]
    fn allowed_in_both_modes() {
        let tool = make_tool();
        assert!(tool.allowed_in_mode(ToolMode::ReadOnly));
        assert!(tool.allowed_in_mode(ToolMode::Full));
    }

    #[test]
    fn tool_metadata() {
        let tool = make_tool();
        assert_eq!(tool.name(), "web_research");
        assert!(!tool.description().is_empty());
    }

    #[test]
    fn format_empty_summary() {
        let summary = make_summary(0, 0, false);
        let output = format_summary(&summary, false);
        assert!(output.contains("No results found"));
        assert!(output.contains("rust"));
    }

    #[test]
    fn format_lists_results_with_sources() {
        let summary = make_summary(3, 0, false);
        let output = format_summary(&summary, false);
        assert!(output.contains("## Research Summary"));
        assert!(output.contains("1. **Result 0**"));
        assert!(output.contains("https://r2.com/page"));
        assert!(output.contains("Source: DuckDuckGo"));
        assert!(output.contains("Found 3 unique results."));
        assert!(!output.contains("Quality:"));
    }

    #[test]
    fn format_deep_includes_verification_line() {
        let summary = make_summary(4, 8, true);
        let output = format_summary(&summary, true);
        assert!(output.contains("Quality: 8/10"));
        assert!(output.contains("corroborated by 3+ independent domains"));
    }

    #[test]
    fn format_unverified_marks_lack_of_corroboration() {
        let summary = make_summary(2, 4, false);
        let output = format_summary(&summary, true);
        assert!(output.contains("Quality: 4/10"));
        assert!(output.contains("not yet corroborated"));
    }
}
