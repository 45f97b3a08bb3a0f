//! Domain layer constants
//!
//! Names and defaults that make up the configuration contract. Constants
//! that only matter to the file sink or the tracing wiring live in
//! `logwire_infrastructure::constants`.

// ============================================================================
// CONFIGURATION FILE CONSTANTS
// ============================================================================

/// File name of the logging configuration
pub const CONFIG_FILE_NAME: &str = "log_config.json";

/// Fallback directory (relative to the executable) holding the configuration
pub const CONFIG_RESOURCES_DIR: &str = "resources";

// ============================================================================
// RESOLUTION CONSTANTS
// ============================================================================

/// Environments that force the debug threshold and skip file routing
pub const DEVELOPMENT_ENVIRONMENTS: [&str; 2] = ["dev", "local"];

/// Formatter name selecting JSON rendering (case-insensitive)
pub const FORMATTER_JSON: &str = "json";

/// Formatter name selecting text rendering (the default)
pub const FORMATTER_TEXT: &str = "text";

// ============================================================================
// ROUTING CONSTANTS
// ============================================================================

/// Extension of the combined (or info/debug) log file
pub const LOG_FILE_EXTENSION: &str = "log";

/// Extension of the warn-and-above file in split mode
pub const ERROR_FILE_EXTENSION: &str = "err";

// ============================================================================
// ROTATION CONSTANTS
// ============================================================================

/// Size cap applied when the configured size is not positive (megabytes)
pub const DEFAULT_MAX_SIZE_MB: u64 = 100;

/// Bytes in one megabyte of rotation cap
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Seconds in one day of backup retention
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
