//! Configuration loader
//!
//! Locates `log_config.json` next to the running executable (or in its
//! `resources/` subdirectory) and parses it with Figment's JSON provider.
//!
//! Loading distinguishes three situations:
//! - the file is missing at both locations: recoverable, [`LoadOutcome::NotFound`]
//! - the file is present but malformed: recoverable, [`LoadOutcome::Malformed`]
//!   carrying a zero-valued configuration
//! - the executable location is unknown, or the file opened but could not be
//!   read: fatal, returned as `Err`

use crate::diagnostics::TracingDiagnostics;
use crate::error_ext::ErrorContext;
use figment::Figment;
use figment::providers::{Format, Json};
use logwire_domain::constants::{CONFIG_FILE_NAME, CONFIG_RESOURCES_DIR};
use logwire_domain::error::{Error, Result};
use logwire_domain::{DiagnosticSink, LogConfiguration};
use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of a configuration lookup
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was found and parsed
    Loaded {
        /// Path the configuration was read from
        path: PathBuf,
        /// Parsed configuration
        config: LogConfiguration,
    },
    /// The file was found but did not parse
    Malformed {
        /// Path the configuration was read from
        path: PathBuf,
        /// Zero-valued configuration to proceed with
        config: LogConfiguration,
        /// Why parsing failed
        error: Error,
    },
    /// No file at any candidate location
    NotFound {
        /// Every path that was tried, in order
        checked: Vec<PathBuf>,
    },
}

impl LoadOutcome {
    /// Configuration to build the logger from, if any.
    ///
    /// A malformed file still yields its zero-valued configuration.
    pub fn config(&self) -> Option<&LogConfiguration> {
        match self {
            Self::Loaded { config, .. } | Self::Malformed { config, .. } => Some(config),
            Self::NotFound { .. } => None,
        }
    }

    /// Path of the file that was found
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Loaded { path, .. } | Self::Malformed { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }

    /// Whether the configuration was found and parsed
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Directory searched instead of the executable's directory
    base_dir: Option<PathBuf>,

    /// Where lookup notices go
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ConfigLoader {
    /// Create a loader searching the executable's directory
    pub fn new() -> Self {
        Self {
            base_dir: None,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Search `dir` instead of the executable's directory
    pub fn with_base_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.base_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Send lookup notices to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Directory the candidates are resolved against
    pub fn base_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }
        executable_dir()
    }

    /// The two candidate locations, in lookup order
    pub fn candidate_paths(&self) -> Result<Vec<PathBuf>> {
        let base = self.base_dir()?;
        Ok(vec![
            base.join(CONFIG_FILE_NAME),
            base.join(CONFIG_RESOURCES_DIR).join(CONFIG_FILE_NAME),
        ])
    }

    /// Look up and parse the configuration.
    ///
    /// The first candidate that opens wins. A read failure after a
    /// successful open is fatal rather than falling through to the next
    /// candidate.
    pub fn load(&self) -> Result<LoadOutcome> {
        let checked = self.candidate_paths()?;

        if let Some(first) = checked.first() {
            self.diagnostics
                .info(&format!("Checking file path: {}", first.display()));
        }

        let Some((path, mut file)) = open_first(&checked) else {
            let tried: Vec<String> = checked.iter().map(|p| p.display().to_string()).collect();
            self.diagnostics
                .info(&format!("Didn't find file at: {}", tried.join(" OR ")));
            return Ok(LoadOutcome::NotFound { checked });
        };

        self.diagnostics
            .info(&format!("Log config found at file path: {}", path.display()));

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|err| Error::unreadable_config(&path, err))?;

        Ok(match parse_configuration(&bytes) {
            Ok(config) => LoadOutcome::Loaded { path, config },
            Err(error) => LoadOutcome::Malformed {
                path,
                config: LogConfiguration::default(),
                error,
            },
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

/// Parse configuration file contents.
///
/// Missing keys take zero values; unknown keys are ignored.
pub fn parse_configuration(bytes: &[u8]) -> Result<LogConfiguration> {
    let content = std::str::from_utf8(bytes).config_context("Log config is not valid UTF-8")?;

    Figment::from(Json::string(content))
        .extract()
        .config_context("Malformed log config")
}

fn executable_dir() -> Result<PathBuf> {
    let executable = env::current_exe().map_err(Error::executable_path)?;
    executable
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::executable_path(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no parent directory", executable.display()),
            ))
        })
}

fn open_first(candidates: &[PathBuf]) -> Option<(PathBuf, File)> {
    candidates
        .iter()
        .find_map(|path| File::open(path).ok().map(|file| (path.clone(), file)))
}
