//! Bootstrap diagnostics adapters
//!
//! Implementations of [`DiagnosticSink`]: one forwarding to the process's
//! current `tracing` subscriber, one collecting notices in memory.

use crate::constants::DIAGNOSTICS_TARGET;
use logwire_domain::DiagnosticSink;
use std::sync::Mutex;
use tracing::{info, warn};

/// Forwards notices to whatever `tracing` subscriber is current.
///
/// Info notices become `INFO` events and advisories become `WARN` events,
/// both under the `logwire::bootstrap` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!(target: DIAGNOSTICS_TARGET, "{message}");
    }

    fn advisory(&self, message: &str) {
        warn!(target: DIAGNOSTICS_TARGET, "{message}");
    }
}

/// Kind of a collected notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational
    Info,
    /// A fallback was applied
    Advisory,
}

/// A collected notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice kind
    pub kind: NoticeKind,
    /// Notice text
    pub message: String,
}

/// Keeps every notice in memory, in arrival order
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notice so far
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    /// Messages of the advisory notices
    pub fn advisories(&self) -> Vec<String> {
        self.messages(NoticeKind::Advisory)
    }

    /// Messages of the informational notices
    pub fn infos(&self) -> Vec<String> {
        self.messages(NoticeKind::Info)
    }

    fn messages(&self, kind: NoticeKind) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|notice| notice.kind == kind)
            .map(|notice| notice.message.clone())
            .collect()
    }

    fn push(&self, kind: NoticeKind, message: &str) {
        self.lock().push(Notice {
            kind,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A panic while pushing leaves the vector intact
        self.notices
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn info(&self, message: &str) {
        self.push(NoticeKind::Info, message);
    }

    fn advisory(&self, message: &str) {
        self.push(NoticeKind::Advisory, message);
    }
}
