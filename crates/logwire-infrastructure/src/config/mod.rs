//! Configuration loading
//!
//! ```text
//! <exe dir>/log_config.json
//!     or <exe dir>/resources/log_config.json
//!     → loader.rs (open, read, parse with Figment)
//!     → LoadOutcome (Loaded / Malformed / NotFound)
//!     → LoggerBuilder
//! ```
//!
//! Configuration is read fresh for every logger; nothing is cached.

pub mod loader;

pub use loader::{ConfigLoader, LoadOutcome, parse_configuration};
