//! Record Severity
//!
//! The seven severities a logger understands, ordered from the most
//! verbose to the most severe.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value Object: Log Record Severity
///
/// Ordering follows verbosity: `Trace < Debug < Info < Warn < Error <
/// Fatal < Panic`. A record is emitted when its severity is greater than
/// or equal to the logger's threshold.
///
/// ## Example
///
/// ```rust
/// use logwire_domain::value_objects::Severity;
///
/// assert_eq!(Severity::parse("WARN"), Some(Severity::Warn));
/// assert!(Severity::Error.is_enabled_at(Severity::Warn));
/// assert!(!Severity::Trace.is_enabled_at(Severity::Debug));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Finest-grained diagnostics
    Trace,
    /// Debugging detail
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that did not fail
    Warn,
    /// A failed operation
    Error,
    /// A failure the application cannot continue after
    Fatal,
    /// The most severe level
    Panic,
}

impl Severity {
    /// All severities, most verbose first
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];

    /// Lowercase name as used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Case-insensitive exact match against the seven known names.
    ///
    /// Returns `None` for anything else, including aliases such as
    /// `"warning"`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether a record at this severity passes `threshold`
    pub fn is_enabled_at(self, threshold: Severity) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Invalid log level: {s}. Use trace, debug, info, warn, error, fatal, or panic"
            ))
        })
    }
}
