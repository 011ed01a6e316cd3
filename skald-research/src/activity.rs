//! Activity log: a user-facing narration channel for research progress.
//!
//! Orchestrator progress is mirrored here so a UI or listener can show
//! live status lines. The log is owned by the [`Researcher`] the caller
//! constructs, not process-wide, and is unbounded — callers clear it
//! between logical sessions.
//!
//! [`Researcher`]: crate::researcher::Researcher

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Severity/kind of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// General progress information.
    Info,
    /// A step completed successfully.
    Success,
    /// A recoverable problem (e.g. one source failed).
    Warning,
    /// An unrecoverable problem within the operation.
    Error,
    /// A search is being issued.
    Search,
    /// A verification step is running or concluded.
    Verify,
    /// Result analysis is running.
    Analyze,
}

impl ActivityLevel {
    /// Short lowercase label used in formatted entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Search => "search",
            Self::Verify => "verify",
            Self::Analyze => "analyze",
        }
    }
}

/// A single appended activity line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// The raw message text.
    pub message: String,
    /// Entry severity/kind.
    pub level: ActivityLevel,
    /// Pre-formatted display string: `[level] message`.
    pub formatted: String,
}

/// Receives each formatted entry synchronously as it is logged.
pub trait ActivitySink: Send + Sync {
    /// Called once per appended entry, before `log` returns.
    fn emit(&self, entry: &ActivityEntry);
}

/// Default sink: echoes entries through `tracing`, so any console
/// subscriber shows progress lines.
pub struct TracingSink;

impl ActivitySink for TracingSink {
    fn emit(&self, entry: &ActivityEntry) {
        match entry.level {
            ActivityLevel::Warning => tracing::warn!(target: "skald::activity", "{}", entry.formatted),
            ActivityLevel::Error => tracing::error!(target: "skald::activity", "{}", entry.formatted),
            _ => tracing::info!(target: "skald::activity", "{}", entry.formatted),
        }
    }
}

/// Append-only activity log with a pluggable sink.
///
/// Writes are single-writer in practice (the orchestrator's calling
/// task); the internal mutex only makes the `&self` API sound.
pub struct ActivityLog {
    entries: Mutex<Vec<ActivityEntry>>,
    sink: Box<dyn ActivitySink>,
}

impl ActivityLog {
    /// Create a log with the default tracing-backed sink.
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    /// Create a log with a custom sink.
    pub fn with_sink(sink: Box<dyn ActivitySink>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            sink,
        }
    }

    /// Append an entry and invoke the sink synchronously before returning.
    pub fn log(&self, message: impl Into<String>, level: ActivityLevel) {
        let message = message.into();
        let entry = ActivityEntry {
            formatted: format!("[{}] {}", level.label(), message),
            message,
            level,
        };
        self.sink.emit(&entry);
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(entry);
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// True when the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Truncate the log to empty.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts emissions so tests can assert the sink fires synchronously.
    struct CountingSink {
        count: Arc<AtomicUsize>,
    }

    impl ActivitySink for CountingSink {
        fn emit(&self, _entry: &ActivityEntry) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn log_appends_entries_in_order() {
        let log = ActivityLog::new();
        log.log("first", ActivityLevel::Info);
        log.log("second", ActivityLevel::Search);

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].level, ActivityLevel::Search);
    }

    #[test]
    fn formatted_includes_level_label() {
        let log = ActivityLog::new();
        log.log("checking sources", ActivityLevel::Verify);
        let entries = log.entries();
        assert_eq!(entries[0].formatted, "[verify] checking sources");
    }

    #[test]
    fn sink_invoked_synchronously_per_entry() {
        let count = Arc::new(AtomicUsize::new(0));
        let log = ActivityLog::with_sink(Box::new(CountingSink {
            count: Arc::clone(&count),
        }));

        log.log("one", ActivityLevel::Info);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        log.log("two", ActivityLevel::Warning);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clear_truncates_log() {
        let log = ActivityLog::new();
        log.log("a", ActivityLevel::Info);
        log.log("b", ActivityLevel::Error);
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn log_usable_after_clear() {
        let log = ActivityLog::new();
        log.log("before", ActivityLevel::Info);
        log.clear();
        log.log("after", ActivityLevel::Success);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].message, "after");
    }

    #[test]
    fn all_level_labels_distinct() {
        let levels = [
            ActivityLevel::Info,
            ActivityLevel::Success,
            ActivityLevel::Warning,
            ActivityLevel::Error,
            ActivityLevel::Search,
            ActivityLevel::Verify,
            ActivityLevel::Analyze,
        ];
        let labels: std::collections::HashSet<&str> =
            levels.iter().map(|l| l.label()).collect();
        assert_eq!(labels.len(), levels.len());
    }

    #[test]
    fn level_serde_round_trip() {
        let json = serde_json::to_string(&ActivityLevel::Analyze).expect("serialize");
        assert_eq!(json, "\"analyze\"");
        let decoded: ActivityLevel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, ActivityLevel::Analyze);
    }

    #[test]
    fn log_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ActivityLog>();
    }
}
