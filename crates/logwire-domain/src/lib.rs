//! # logwire domain
//!
//! Pure types and policy for configuration-driven logger construction.
//!
//! - [`value_objects`] - severities, configuration schema, routing plan and
//!   the settings resolution policy
//! - [`ports`] - the diagnostics contract
//! - [`error`] - the crate-wide error type
//! - [`constants`] - file names and defaults of the configuration contract
//!
//! Nothing in this crate touches the filesystem.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::DiagnosticSink;
pub use value_objects::{
    FormatterKind, LogConfiguration, LoggerSettings, RotationPolicy, RoutingPlan, Severity,
};
