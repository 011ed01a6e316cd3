//! Claim verification tool — checks how well a claim is supported online.
//!
//! Runs a deep multi-source search over the topic and claim, then
//! reports the domain-diversity verdict alongside the supporting
//! results. Same sync-to-async bridge as the research tool.

use std::sync::Arc;

use skald_research::{ClaimCheck, Researcher};

use crate::error::SkaldError;

use super::types::{truncate_output, Tool, ToolMode, ToolResult, DEFAULT_MAX_BYTES};

/// Tool that verifies a claim against a deep web search.
///
/// The verdict is a corroboration signal (how many independent domains
/// discuss the topic), not a truth oracle; the description says so to
/// keep the chat backend from over-claiming.
///
/// # Arguments (JSON)
///
/// - `topic` (string, required) — what the claim is about
/// - `claim` (string, required) — the claim to check
pub struct VerifyClaimTool {
    researcher: Arc<Researcher>,
    max_bytes: usize,
}

impl VerifyClaimTool {
    /// Create a new `VerifyClaimTool` over a shared researcher.
    pub fn new(researcher: Arc<Researcher>) -> Self {
        Self {
            researcher,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl Tool for VerifyClaimTool {
    fn name(&self) -> &str {
        "verify_claim"
    }

    fn description(&self) -> &str {
        "Check how broadly a claim is corroborated across independent web domains. Signals breadth of support, not factual truth."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "What the claim is about"
                },
                "claim": {
                    "type": "string",
                    "description": "The claim to check"
                }
            },
            "required": ["topic", "claim"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> Result<ToolResult, SkaldError> {
        let topic = require_string(&args, "topic")?;
        let claim = require_string(&args, "claim")?;

        tracing::debug!("verify_claim invoked");

        let handle = tokio::runtime::Handle::current();
        let check = handle
            .block_on(self.researcher.verify_information(topic, claim))
            .map_err(|e| SkaldError::ToolExecutionError(format!("verification failed: {e}")))?;

        let output = format_claim_check(&check);

        let (truncated_output, was_truncated) = truncate_output(&output, self.max_bytes);
        if was_truncated {
            Ok(ToolResult::success_truncated(truncated_output))
        } else {
            Ok(ToolResult::success(truncated_output))
        }
    }

    fn allowed_in_mode(&self, _mode: ToolMode) -> bool {
        true // verification is read-only, allowed in all modes
    }
}

/// Pull a required, non-empty string argument out of the JSON args.
fn require_string<'a>(args: &'a serde_json::Value, key: &str) -> Result<&'a str, SkaldError> {
    let value = args.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
        SkaldError::ToolValidationError(format!("missing required argument: {key}"))
    })?;
    if value.trim().is_empty() {
        return Err(SkaldError::ToolValidationError(format!(
            "{key} must not be empty"
        )));
    }
    Ok(value)
}

/// Format a claim check as markdown for LLM consumption.
pub(crate) fn format_claim_check(check: &ClaimCheck) -> String {
    let verdict = if check.verification.verified {
        "SUPPORTED"
    } else {
        "INSUFFICIENT CORROBORATION"
    };

    let mut output = format!(
        "## Claim Check: {verdict}\n\nTopic: {}\nClaim: {}\nSources found: {}\nQuality: {}/10\n\n",
        check.topic,
        check.claim,
        check.verification.sources_found,
        check.verification.quality_score,
    );

    if check.summary.top_results.is_empty() {
        output.push_str("No supporting results were found.\n");
    } else {
        output.push_str("Top supporting results:\n");
        for (i, result) in check.summary.top_results.iter().enumerate() {
            output.push_str(&format!(
                "{}. **{}**\n   URL: {}\n   {}\n\n",
                i + 1,
                result.title,
                result.url,
                result.snippet,
            ));
        }
    }

    output
}
