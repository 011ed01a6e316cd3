//! Source backend implementations.
//!
//! Each module provides a struct implementing [`crate::source::SourceAdapter`]
//! that scrapes a specific search backend's HTML results page.

pub mod bing;
pub mod brave;
pub mod duckduckgo;

pub use bing::BingSource;
pub use brave::BraveSource;
pub use duckduckgo::DuckDuckGoSource;
