//! Tool system for the skald assistant layer.
//!
//! Provides a registry-based tool architecture with mode gating,
//! JSON Schema export, and bounded output.
//!
//! # Tools
//!
//! - **web_research** — multi-source web search with optional
//!   domain-diversity verification
//! - **verify_claim** — checks how broadly a claim is corroborated online
//!
//! OS action tools (app launching, screenshots, input control), the
//! transcription relay, and plan bookkeeping are provided by external
//! collaborators that implement the same [`Tool`] trait.

pub mod registry;
pub mod research;
pub mod types;
pub mod verify_claim;

pub use registry::ToolRegistry;
pub use research::WebResearchTool;
pub use types::{Tool, ToolMode, ToolResult};
pub use verify_claim::VerifyClaimTool;
