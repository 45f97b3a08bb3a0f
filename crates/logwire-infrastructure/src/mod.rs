//! # Infrastructure Layer
//!
//! Filesystem and `tracing` side of logwire: finds the configuration file,
//! wires loggers from it and writes rotated log files.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `log_config.json` lookup and parsing with Figment |
//! | [`constants`] | Tracing targets and rotation naming |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Logger construction, routing and rotating files |
//! | [`diagnostics`] | Bootstrap notice adapters |

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, LoadOutcome};
pub use diagnostics::{CollectingDiagnostics, TracingDiagnostics};
pub use error_ext::ErrorContext;
pub use logging::{Logger, LoggerBuilder, LoggerFactory, RotatingFile, get_logger};
