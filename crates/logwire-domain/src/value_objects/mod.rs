//! Domain Value Objects
//!
//! Immutable values describing how a logger is configured and wired.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Severity`] | The seven record severities, ordered by verbosity |
//! | [`FormatterKind`] | Text or JSON rendering |
//! | [`LogConfiguration`] | Declarative contract read from `log_config.json` |
//! | [`RotationPolicy`] | Size, backup, age and compression thresholds |
//! | [`RoutingPlan`] | Default, combined-file or split-file routing |
//! | [`LoggerSettings`] | Resolved threshold, formatter and routing |

/// Configuration schema
pub mod config;
/// Formatter selection
pub mod formatter;
/// Output routing and the split table
pub mod routing;
/// Settings resolution policy
pub mod settings;
/// Record severities
pub mod severity;

// Re-export commonly used value objects
pub use config::{LogConfiguration, RotationPolicy};
pub use formatter::FormatterKind;
pub use routing::{Destination, FileSink, RoutingPlan, SPLIT_TABLE, SplitSinks, SplitTarget};
pub use settings::{DEFAULT_THRESHOLD, LoggerSettings};
pub use severity::Severity;
