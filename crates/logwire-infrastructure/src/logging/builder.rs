//! Logger construction
//!
//! Turns resolved [`LoggerSettings`] into a `tracing` dispatcher: one fmt
//! layer per destination, each with its own severity filter. File
//! destinations write through `tracing-appender`'s non-blocking worker into
//! a [`RotatingFile`].

use crate::diagnostics::TracingDiagnostics;
use crate::logging::logger::{Logger, severity_of, tracing_level};
use crate::logging::rotating::RotatingFile;
use logwire_domain::value_objects::{FileSink, SplitTarget};
use logwire_domain::{
    DiagnosticSink, FormatterKind, LogConfiguration, LoggerSettings, RoutingPlan, Severity,
};
use std::io;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Metadata};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::{self, MakeWriter, writer::BoxMakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

type WriterFactory = Arc<dyn Fn() -> Box<dyn io::Write + Send> + Send + Sync>;

/// Builds loggers from a name and an optional configuration
#[derive(Clone)]
pub struct LoggerBuilder {
    /// Where resolution notices go
    diagnostics: Arc<dyn DiagnosticSink>,

    /// Replacement for the built-in default destination (standard error)
    default_writer: Option<WriterFactory>,
}

impl LoggerBuilder {
    /// Create a builder reporting to the ambient `tracing` subscriber
    pub fn new() -> Self {
        Self {
            diagnostics: Arc::new(TracingDiagnostics),
            default_writer: None,
        }
    }

    /// Send resolution notices to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Use `make_writer` instead of standard error for the default
    /// destination. ANSI colors are turned off for such writers.
    pub fn with_default_writer<F, W>(mut self, make_writer: F) -> Self
    where
        F: Fn() -> W + Send + Sync + 'static,
        W: io::Write + Send + 'static,
    {
        self.default_writer = Some(Arc::new(move || Box::new(make_writer())));
        self
    }

    /// Build the logger `name`.
    ///
    /// Without a configuration the logger keeps its defaults (debug, text,
    /// standard error). Never fails: unusable values fall back with an
    /// advisory, and file sinks are only opened when a record is written.
    pub fn build(&self, name: &str, config: Option<&LogConfiguration>) -> Logger {
        let settings = LoggerSettings::resolve(name, config, self.diagnostics.as_ref());
        let mut guards = Vec::new();

        let layers: Vec<BoxedLayer> = match &settings.routing {
            RoutingPlan::Default => vec![self.default_layer(&settings)],
            RoutingPlan::Combined(sink) => {
                vec![file_layer(sink, None, &settings, &mut guards)]
            }
            RoutingPlan::Split(sinks) => [SplitTarget::Errors, SplitTarget::Info]
                .into_iter()
                .map(|target| file_layer(sinks.sink(target), Some(target), &settings, &mut guards))
                .collect(),
        };

        let dispatch = Dispatch::new(Registry::default().with(layers));
        Logger::new(name, settings, dispatch, guards)
    }

    fn default_layer(&self, settings: &LoggerSettings) -> BoxedLayer {
        let filter = record_filter(settings.threshold, None);
        match &self.default_writer {
            Some(factory) => {
                let factory = Arc::clone(factory);
                let writer = BoxMakeWriter::new(move || factory());
                format_layer(settings.formatter, writer, false, filter)
            }
            None => format_layer(settings.formatter, io::stderr, true, filter),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("default_writer", &self.default_writer.is_some())
            .finish_non_exhaustive()
    }
}

fn file_layer(
    sink: &FileSink,
    target: Option<SplitTarget>,
    settings: &LoggerSettings,
    guards: &mut Vec<WorkerGuard>,
) -> BoxedLayer {
    let (writer, guard) = tracing_appender::non_blocking(RotatingFile::new(sink));
    guards.push(guard);
    format_layer(
        settings.formatter,
        writer,
        false,
        record_filter(settings.threshold, target),
    )
}

fn format_layer<W, F>(formatter: FormatterKind, writer: W, ansi: bool, filter: F) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    F: Fn(&Metadata<'_>) -> bool + Send + Sync + 'static,
{
    let layer = fmt::layer::<Registry>()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    match formatter {
        FormatterKind::Json => Box::new(layer.json().with_filter(filter_fn(filter))),
        FormatterKind::Text => Box::new(layer.with_filter(filter_fn(filter))),
    }
}

/// Accept records at or above `threshold`, and in split mode only the
/// severities of `target`.
fn record_filter(
    threshold: Severity,
    target: Option<SplitTarget>,
) -> impl Fn(&Metadata<'_>) -> bool + Send + Sync + 'static {
    let max_level = LevelFilter::from_level(tracing_level(threshold));
    move |metadata: &Metadata<'_>| {
        *metadata.level() <= max_level
            && target.is_none_or(|target| target.accepts(severity_of(metadata.level())))
    }
}
