//! # skald
//!
//! AI-assistant tool layer. A chat backend decides *when* to call a
//! tool; this crate defines the closed [`Tool`](tools::Tool) surface it
//! dispatches against and provides the research-backed tools built on
//! the embedded [`skald_research`] engine.
//!
//! The chat backend itself, OS action tools, audio transcription, and
//! conversation/plan storage are external collaborators — they program
//! against the same trait but live elsewhere.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use skald::tools::{ToolMode, ToolRegistry, WebResearchTool, VerifyClaimTool};
//! use skald_research::Researcher;
//!
//! let researcher = Arc::new(Researcher::new(Default::default()));
//! let mut registry = ToolRegistry::new(ToolMode::ReadOnly);
//! registry.register(Arc::new(WebResearchTool::new(Arc::clone(&researcher))));
//! registry.register(Arc::new(VerifyClaimTool::new(researcher)));
//!
//! // Hand registry.schemas_for_api() to the chat backend.
//! ```

pub mod error;
pub mod tools;

pub use error::{Result, SkaldError};
