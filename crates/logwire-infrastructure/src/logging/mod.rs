//! Logger wiring
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Settings resolution into a `tracing` dispatcher |
//! | [`factory`] | Configuration lookup plus build, and [`get_logger`] |
//! | [`logger`] | The configured logger handle |
//! | [`rotating`] | Size-rotated log file with backup retention |
//!
//! Each logger owns its dispatcher; building one never installs a global
//! subscriber.

pub mod builder;
pub mod factory;
pub mod logger;
pub mod rotating;

pub use builder::LoggerBuilder;
pub use factory::{LoggerFactory, get_logger};
pub use logger::{Logger, severity_of, tracing_level};
pub use rotating::RotatingFile;
