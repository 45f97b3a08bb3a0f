//! # logwire
//!
//! Builds named loggers from a `log_config.json` placed next to the running
//! executable (or in its `resources/` subdirectory).
//!
//! The configuration decides the minimum severity, the record format
//! (`text` or `json`) and where records go:
//!
//! | Mode | Destination |
//! |------|-------------|
//! | no configuration, or `dev` / `local` environment | standard error |
//! | combined | `<outputDirectory><name>.log` |
//! | split | `warn` and above to `.err`, `info` and `debug` to `.log`, `trace` nowhere |
//!
//! Files are size-rotated, with backups pruned by count and age and
//! optionally gzipped.
//!
//! ## Example
//!
//! ```ignore
//! let logger = logwire::get_logger("billing")?;
//! logger.info("service started");
//! logger.error(format_args!("charge {id} failed"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - severities, configuration schema, routing policy, errors
//! - `infrastructure` - configuration lookup, `tracing` wiring, rotating files

/// Domain layer - severities, configuration and routing policy
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use logwire_domain::*;
}

/// Infrastructure layer - configuration loading and logger wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use logwire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{
    DiagnosticSink, Error, FormatterKind, LogConfiguration, LoggerSettings, Result, RoutingPlan,
    Severity,
};

// Re-export the entry point and logger types at the crate root
pub use infrastructure::{ConfigLoader, Logger, LoggerBuilder, LoggerFactory, get_logger};
