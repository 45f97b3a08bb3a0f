//! Logger settings resolution
//!
//! Reconciles environment, explicit level, formatter and defaults into the
//! settings a logger is built from. This is a one-shot, linear resolution:
//! nothing is retained between calls.

use crate::ports::DiagnosticSink;
use crate::value_objects::{FormatterKind, LogConfiguration, RoutingPlan, Severity};

/// Threshold used when nothing else applies
pub const DEFAULT_THRESHOLD: Severity = Severity::Debug;

/// Fully resolved logger settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    /// Minimum severity emitted
    pub threshold: Severity,
    /// Record rendering mode
    pub formatter: FormatterKind,
    /// Whether records carry call-site metadata
    pub report_caller: bool,
    /// Where records go
    pub routing: RoutingPlan,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            formatter: FormatterKind::Text,
            report_caller: false,
            routing: RoutingPlan::Default,
        }
    }
}

impl LoggerSettings {
    /// Resolve the settings for logger `name`.
    ///
    /// Without a configuration the hardcoded defaults apply and no routing
    /// happens. Development environments (`dev`, `local`) force the debug
    /// threshold and keep the default destination. Any other environment
    /// maps `level` onto the threshold and routes to files.
    pub fn resolve(
        name: &str,
        config: Option<&LogConfiguration>,
        diagnostics: &dyn DiagnosticSink,
    ) -> Self {
        let mut settings = Self::default();
        let Some(config) = config else {
            return settings;
        };

        let (formatter, unrecognized) = FormatterKind::resolve(&config.formatter);
        if unrecognized {
            diagnostics.advisory(&format!(
                "Formatter unknown ({:?}): using default formatter `text`",
                config.formatter
            ));
        }
        settings.formatter = formatter;
        settings.report_caller = config.report_caller;

        if config.is_development() {
            diagnostics.info("Log level defaults to DEBUG for environments `dev` and `local`");
            settings.threshold = DEFAULT_THRESHOLD;
        } else {
            match Severity::parse(&config.level) {
                Some(threshold) => settings.threshold = threshold,
                None => diagnostics.advisory(&format!(
                    "Log level unknown ({:?}): keeping `{}`",
                    config.level, settings.threshold
                )),
            }
            settings.routing = RoutingPlan::for_config(name, config);
            announce_routing(&settings.routing, diagnostics);
        }

        diagnostics.info(&format!("Log level set to: {}", settings.threshold));
        settings
    }
}

fn announce_routing(routing: &RoutingPlan, diagnostics: &dyn DiagnosticSink) {
    match routing {
        RoutingPlan::Default => {}
        RoutingPlan::Combined(sink) => diagnostics.info(&format!(
            "Redirecting all levels to file: {}",
            sink.path.display()
        )),
        RoutingPlan::Split(sinks) => {
            diagnostics.info(&format!(
                "Redirecting WARN, ERROR, FATAL, PANIC to file: {}",
                sinks.errors.path.display()
            ));
            diagnostics.info(&format!(
                "Redirecting DEBUG, INFO to file: {}",
                sinks.info.path.display()
            ));
        }
    }
}
