//! Logging configuration schema
//!
//! The declarative contract read from `log_config.json`. Every field falls
//! back to its zero value when the key is missing, and unknown keys are
//! ignored. A `null` value reads as if the key were missing. Legacy key
//! names are accepted as aliases.

use crate::constants::{
    BYTES_PER_MEGABYTE, DEFAULT_MAX_SIZE_MB, DEVELOPMENT_ENVIRONMENTS, SECONDS_PER_DAY,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Logging configuration
///
/// Read-only input to logger construction: loaded fresh for every logger
/// and never mutated afterwards.
///
/// ## Example
///
/// ```rust
/// use logwire_domain::value_objects::LogConfiguration;
///
/// let config: LogConfiguration = serde_json::from_str(
///     r#"{ "level": "error", "environment": "prod", "outputDirectory": "/tmp/logs/" }"#,
/// ).unwrap();
/// assert_eq!(config.level, "error");
/// assert!(!config.split_error_file);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfiguration {
    /// Prefix prepended verbatim to `<name>.log` / `<name>.err`
    #[serde(alias = "path", deserialize_with = "null_as_default")]
    pub output_directory: String,

    /// Minimum severity name (trace, debug, info, warn, error, fatal, panic)
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,

    /// Rotation size cap in megabytes
    #[serde(
        rename = "maxSizeMB",
        alias = "maxSizeInMb",
        deserialize_with = "null_as_default"
    )]
    pub max_size_mb: i64,

    /// Number of rotated files to keep
    #[serde(deserialize_with = "null_as_default")]
    pub max_backups: i64,

    /// Age in days after which rotated files are removed
    #[serde(alias = "maxAgeInDays", deserialize_with = "null_as_default")]
    pub max_age_days: i64,

    /// Gzip rotated files
    #[serde(alias = "gZipCompress", deserialize_with = "null_as_default")]
    pub compress_rotated: bool,

    /// Send warn-and-above and info/debug records to separate files
    #[serde(alias = "isDifferentErrorFile", deserialize_with = "null_as_default")]
    pub split_error_file: bool,

    /// Record rendering mode (`text` or `json`)
    #[serde(deserialize_with = "null_as_default")]
    pub formatter: String,

    /// Deployment environment; `dev` and `local` disable file routing
    #[serde(alias = "env", deserialize_with = "null_as_default")]
    pub environment: String,

    /// Include call-site metadata in records
    #[serde(alias = "shouldSetCaller", deserialize_with = "null_as_default")]
    pub report_caller: bool,
}

impl LogConfiguration {
    /// Whether `environment` names a development environment (any case)
    pub fn is_development(&self) -> bool {
        DEVELOPMENT_ENVIRONMENTS
            .iter()
            .any(|env| self.environment.eq_ignore_ascii_case(env))
    }

    /// Rotation parameters shared by every file sink of this configuration
    pub fn rotation(&self) -> RotationPolicy {
        RotationPolicy {
            max_size_mb: self.max_size_mb,
            max_backups: self.max_backups,
            max_age_days: self.max_age_days,
            compress: self.compress_rotated,
        }
    }
}

/// Rotation thresholds forwarded verbatim to a rotating file sink.
///
/// Values are kept as configured; the accessors apply the sink's reading
/// of non-positive values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// Size cap in megabytes
    pub max_size_mb: i64,
    /// Rotated files retained
    pub max_backups: i64,
    /// Rotated file lifetime in days
    pub max_age_days: i64,
    /// Gzip rotated files
    pub compress: bool,
}

impl RotationPolicy {
    /// Size cap in bytes; non-positive sizes use the 100 MB default
    pub fn max_bytes(&self) -> u64 {
        let megabytes = u64::try_from(self.max_size_mb)
            .ok()
            .filter(|mb| *mb > 0)
            .unwrap_or(DEFAULT_MAX_SIZE_MB);
        megabytes.saturating_mul(BYTES_PER_MEGABYTE)
    }

    /// Backups to keep, `None` meaning all of them
    pub fn backup_limit(&self) -> Option<usize> {
        usize::try_from(self.max_backups).ok().filter(|n| *n > 0)
    }

    /// Maximum backup age, `None` meaning backups never expire
    pub fn max_age(&self) -> Option<Duration> {
        u64::try_from(self.max_age_days)
            .ok()
            .filter(|days| *days > 0)
            .map(|days| Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY)))
    }
}

/// Read `null` as the field's zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
