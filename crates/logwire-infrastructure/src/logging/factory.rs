//! Logger factory
//!
//! The bootstrap entry point: looks up `log_config.json`, then builds the
//! named logger from whatever was found.

use crate::config::{ConfigLoader, LoadOutcome};
use crate::diagnostics::TracingDiagnostics;
use crate::logging::builder::LoggerBuilder;
use crate::logging::logger::Logger;
use logwire_domain::DiagnosticSink;
use logwire_domain::error::Result;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Loads configuration and builds loggers from it
#[derive(Clone)]
pub struct LoggerFactory {
    loader: ConfigLoader,
    builder: LoggerBuilder,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl LoggerFactory {
    /// Create a factory searching the executable's directory
    pub fn new() -> Self {
        Self {
            loader: ConfigLoader::new(),
            builder: LoggerBuilder::new(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Search `dir` instead of the executable's directory
    pub fn with_base_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.loader = self.loader.with_base_dir(dir);
        self
    }

    /// Send every bootstrap notice to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.loader = self.loader.with_diagnostics(Arc::clone(&diagnostics));
        self.builder = self.builder.with_diagnostics(Arc::clone(&diagnostics));
        self.diagnostics = diagnostics;
        self
    }

    /// Replace standard error as the default destination
    pub fn with_default_writer<F, W>(mut self, make_writer: F) -> Self
    where
        F: Fn() -> W + Send + Sync + 'static,
        W: io::Write + Send + 'static,
    {
        self.builder = self.builder.with_default_writer(make_writer);
        self
    }

    /// Configuration loader in use
    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    /// Load the configuration and build the logger `name`.
    ///
    /// A missing or malformed file is reported as an advisory and the logger
    /// is built from what is available. Only fatal lookup failures are
    /// returned as errors.
    pub fn get_logger(&self, name: &str) -> Result<Logger> {
        let outcome = self.loader.load()?;

        match &outcome {
            LoadOutcome::Loaded { .. } => {}
            LoadOutcome::Malformed { error, .. } => self
                .diagnostics
                .advisory(&format!("Error loading log config file: {error}")),
            LoadOutcome::NotFound { .. } => self.diagnostics.advisory("Error loading log config file"),
        }

        Ok(self.builder.build(name, outcome.config()))
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("loader", &self.loader)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

/// Build the logger `name` from the configuration next to the running
/// executable, reporting through the current `tracing` subscriber.
///
/// # Errors
///
/// Fails when the executable's location cannot be determined or when a
/// configuration file was found but could not be read. Callers should treat
/// both as fatal (see [`logwire_domain::Error::is_fatal`]).
pub fn get_logger(name: &str) -> Result<Logger> {
    LoggerFactory::new().get_logger(name)
}
