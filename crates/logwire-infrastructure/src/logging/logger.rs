//! Configured logger handle

use crate::constants::LOG_TARGET;
use logwire_domain::{FormatterKind, LoggerSettings, RoutingPlan, Severity};
use std::fmt;
use std::panic::Location;
use tracing::{Dispatch, Level, dispatcher, event};
use tracing_appender::non_blocking::WorkerGuard;

/// Rendering level of a severity. `fatal` and `panic` have no native
/// counterpart and render at `ERROR`.
pub fn tracing_level(severity: Severity) -> Level {
    match severity {
        Severity::Trace => Level::TRACE,
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warn => Level::WARN,
        Severity::Error | Severity::Fatal | Severity::Panic => Level::ERROR,
    }
}

/// Severity of a rendering level; `ERROR` reads back as `error`
pub fn severity_of(level: &Level) -> Severity {
    [
        (Level::TRACE, Severity::Trace),
        (Level::DEBUG, Severity::Debug),
        (Level::INFO, Severity::Info),
        (Level::WARN, Severity::Warn),
    ]
    .into_iter()
    .find_map(|(native, severity)| (native == *level).then_some(severity))
    .unwrap_or(Severity::Error)
}

macro_rules! emit {
    ($level:expr, $logger:expr, $severity:expr, $caller:expr, $message:expr) => {
        event!(
            target: LOG_TARGET,
            $level,
            logger = $logger,
            severity = $severity,
            caller = $caller,
            "{}",
            $message
        )
    };
}

/// A logger wired from configuration.
///
/// Records below the threshold are suppressed; the rest are rendered by
/// the configured formatter and routed per the logger's [`RoutingPlan`].
/// Dropping the logger flushes its file sinks.
///
/// ## Example
///
/// ```ignore
/// let logger = logwire_infrastructure::get_logger("svc")?;
/// logger.info("service started");
/// logger.in_scope(|| tracing::warn!(attempt = 3, "retrying"));
/// ```
#[derive(Debug)]
pub struct Logger {
    name: String,
    settings: LoggerSettings,
    dispatch: Dispatch,
    _guards: Vec<WorkerGuard>,
}

impl Logger {
    pub(crate) fn new(
        name: &str,
        settings: LoggerSettings,
        dispatch: Dispatch,
        guards: Vec<WorkerGuard>,
    ) -> Self {
        Self {
            name: name.to_string(),
            settings,
            dispatch,
            _guards: guards,
        }
    }

    /// Logger name, as used in file names
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved settings
    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    /// Minimum severity emitted
    pub fn threshold(&self) -> Severity {
        self.settings.threshold
    }

    /// Record rendering mode
    pub fn formatter(&self) -> FormatterKind {
        self.settings.formatter
    }

    /// Whether records carry their call site
    pub fn report_caller(&self) -> bool {
        self.settings.report_caller
    }

    /// Where records go
    pub fn routing(&self) -> &RoutingPlan {
        &self.settings.routing
    }

    /// The underlying `tracing` dispatcher
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Whether a record at `severity` would be emitted
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.is_enabled_at(self.settings.threshold)
    }

    /// Run `f` with this logger as the current `tracing` dispatcher, so
    /// plain `tracing` macros inside it are routed here.
    ///
    /// Such events are filtered at their rendering level, where `fatal`
    /// and `panic` thresholds both read as `ERROR`.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Emit `message` at `severity`.
    ///
    /// Emitting at `fatal` or `panic` only records the message; it does not
    /// terminate the process.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        if !self.enabled(severity) {
            return;
        }

        let location = Location::caller();
        let caller = self.settings.report_caller.then(|| location.to_string());
        let caller = caller.as_deref();
        let logger = self.name.as_str();
        let name = severity.as_str();

        dispatcher::with_default(&self.dispatch, || match severity {
            Severity::Trace => emit!(Level::TRACE, logger, name, caller, message),
            Severity::Debug => emit!(Level::DEBUG, logger, name, caller, message),
            Severity::Info => emit!(Level::INFO, logger, name, caller, message),
            Severity::Warn => emit!(Level::WARN, logger, name, caller, message),
            Severity::Error | Severity::Fatal | Severity::Panic => {
                emit!(Level::ERROR, logger, name, caller, message);
            }
        });
    }

    /// Emit at `trace`
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Severity::Trace, message);
    }

    /// Emit at `debug`
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    /// Emit at `info`
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    /// Emit at `warn`
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warn, message);
    }

    /// Emit at `error`
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    /// Emit at `fatal`
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(Severity::Fatal, message);
    }

    /// Emit at `panic`
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) {
        self.log(Severity::Panic, message);
    }
}
