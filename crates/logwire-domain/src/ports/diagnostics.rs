//! Diagnostics Port
//!
//! Defines where bootstrap notices go: which configuration path was
//! checked, which formatter and level were resolved, where records are
//! routed. Notices never go to the logger under construction.

/// Destination for bootstrap notices
pub trait DiagnosticSink: Send + Sync {
    /// An informational notice
    fn info(&self, message: &str);

    /// An advisory notice: a fallback was applied
    fn advisory(&self, message: &str);
}
