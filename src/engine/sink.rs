//! Observability sinks for replacement records.
//!
//! Every resolved placeholder produces one record: the caller's label (the
//! proxy tool or request source), the placeholder text, and the substituted
//! value. Sinks are fire-and-forget and cannot fail the transform.

use std::sync::Mutex;

/// Receives one record per resolved placeholder.
pub trait ObservabilitySink: Send + Sync {
    fn replaced(&self, label: &str, placeholder: &str, value: &str);
}

/// Logs records through `tracing` at info level under the
/// `reqfaker::replace` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ObservabilitySink for TracingSink {
    fn replaced(&self, label: &str, placeholder: &str, value: &str) {
        tracing::info!(target: "reqfaker::replace", "[{}] Replaced {} -> {}", label, placeholder, value);
    }
}

/// One replacement as seen by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRecord {
    pub label: String,
    pub placeholder: String,
    pub value: String,
}

/// Keeps records in memory, for hosts that display them and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<ReplacementRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all records received so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<ReplacementRecord> {
        self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Remove and return all records.
    pub fn drain(&self) -> Vec<ReplacementRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner))
    }
}

impl ObservabilitySink for MemorySink {
    fn replaced(&self, label: &str, placeholder: &str, value: &str) {
        self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(
            ReplacementRecord {
                label: label.to_string(),
                placeholder: placeholder.to_string(),
                value: value.to_string(),
            },
        );
    }
}
