//! Infrastructure layer constants
//!
//! Constants of the tracing wiring and the rotating file sink.
//! Configuration-contract constants are defined in `logwire_domain::constants`.

// ============================================================================
// TRACING CONSTANTS
// ============================================================================

/// Target of records emitted through a [`crate::logging::Logger`]
pub const LOG_TARGET: &str = "logwire";

/// Target of bootstrap diagnostics and rotation cleanup warnings sent to the
/// ambient subscriber
pub const DIAGNOSTICS_TARGET: &str = "logwire::bootstrap";

// ============================================================================
// ROTATION CONSTANTS
// ============================================================================

/// Timestamp embedded in rotated file names (UTC, millisecond precision)
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// Extension appended to compressed backups
pub const COMPRESSED_EXTENSION: &str = "gz";
