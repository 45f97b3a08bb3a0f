//! Output routing
//!
//! Decides which physical destination receives a record of a given
//! severity. Split mode is driven by an explicit severity table so that
//! every severity, including the dropped `trace`, has a visible entry.

use crate::constants::{ERROR_FILE_EXTENSION, LOG_FILE_EXTENSION};
use crate::value_objects::{LogConfiguration, RotationPolicy, Severity};
use std::path::PathBuf;

/// Which split-mode file a severity is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitTarget {
    /// `<name>.err`: warn and above
    Errors,
    /// `<name>.log`: info and debug
    Info,
}

/// Severity to split target table.
///
/// `trace` maps to no file at all while splitting is enabled.
pub const SPLIT_TABLE: [(Severity, Option<SplitTarget>); 7] = [
    (Severity::Panic, Some(SplitTarget::Errors)),
    (Severity::Fatal, Some(SplitTarget::Errors)),
    (Severity::Error, Some(SplitTarget::Errors)),
    (Severity::Warn, Some(SplitTarget::Errors)),
    (Severity::Info, Some(SplitTarget::Info)),
    (Severity::Debug, Some(SplitTarget::Info)),
    (Severity::Trace, None),
];

impl SplitTarget {
    /// Look up the split target of `severity`
    pub fn for_severity(severity: Severity) -> Option<Self> {
        SPLIT_TABLE
            .iter()
            .find(|(entry, _)| *entry == severity)
            .and_then(|(_, target)| *target)
    }

    /// The severities this target accepts, most verbose first
    pub fn severities(self) -> Vec<Severity> {
        Severity::ALL
            .into_iter()
            .filter(|severity| Self::for_severity(*severity) == Some(self))
            .collect()
    }

    /// Whether this target accepts `severity`
    pub fn accepts(self, severity: Severity) -> bool {
        Self::for_severity(severity) == Some(self)
    }
}

/// A rotating file destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    /// Path of the active file
    pub path: PathBuf,
    /// Rotation thresholds
    pub rotation: RotationPolicy,
}

impl FileSink {
    /// Build `<output_directory><name>.<extension>`.
    ///
    /// The directory is a plain string prefix, not a path component: a
    /// missing trailing separator glues the directory and the name together.
    pub fn for_logger(config: &LogConfiguration, name: &str, extension: &str) -> Self {
        Self {
            path: PathBuf::from(format!("{}{name}.{extension}", config.output_directory)),
            rotation: config.rotation(),
        }
    }
}

/// The logger's primary destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Built-in default output (standard error)
    Default,
    /// Everything written here is dropped
    Discard,
    /// A rotating file
    File(FileSink),
}

/// The two files used in split mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSinks {
    /// Receives panic, fatal, error and warn
    pub errors: FileSink,
    /// Receives info and debug
    pub info: FileSink,
}

impl SplitSinks {
    /// The file for `target`
    pub fn sink(&self, target: SplitTarget) -> &FileSink {
        match target {
            SplitTarget::Errors => &self.errors,
            SplitTarget::Info => &self.info,
        }
    }
}

/// How a logger's records reach their destinations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoutingPlan {
    /// No customization; the built-in default output
    #[default]
    Default,
    /// One rotating file receives every emitted record
    Combined(FileSink),
    /// Discard primary output; severity-filtered files instead
    Split(SplitSinks),
}

impl RoutingPlan {
    /// Routing for a non-development configuration
    pub fn for_config(name: &str, config: &LogConfiguration) -> Self {
        let info = FileSink::for_logger(config, name, LOG_FILE_EXTENSION);
        if !config.split_error_file {
            return Self::Combined(info);
        }
        Self::Split(SplitSinks {
            errors: FileSink::for_logger(config, name, ERROR_FILE_EXTENSION),
            info,
        })
    }

    /// The primary destination
    pub fn primary(&self) -> Destination {
        match self {
            Self::Default => Destination::Default,
            Self::Combined(sink) => Destination::File(sink.clone()),
            Self::Split(_) => Destination::Discard,
        }
    }

    /// Every file sink this plan writes to
    pub fn file_sinks(&self) -> Vec<&FileSink> {
        match self {
            Self::Default => Vec::new(),
            Self::Combined(sink) => vec![sink],
            Self::Split(sinks) => vec![&sinks.errors, &sinks.info],
        }
    }

    /// Files that receive an emitted record of `severity`.
    ///
    /// Threshold filtering is not applied here.
    pub fn files_for(&self, severity: Severity) -> Vec<&FileSink> {
        match self {
            Self::Default => Vec::new(),
            Self::Combined(sink) => vec![sink],
            Self::Split(sinks) => SplitTarget::for_severity(severity)
                .map(|target| vec![sinks.sink(target)])
                .unwrap_or_default(),
        }
    }
}
