//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for logwire
#[derive(Error, Debug)]
pub enum Error {
    /// The running executable could not report its own location
    #[error("Unable to determine executable location: {source}")]
    ExecutablePath {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was opened but its contents could not be read
    #[error("Log configuration at {} could not be read: {source}", path.display())]
    UnreadableConfig {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

impl Error {
    /// Whether this error means the process environment itself is broken.
    ///
    /// Fatal errors are the ones an embedding application would normally
    /// abort on: the executable path is undiscoverable, or a configuration
    /// file exists but cannot be read.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ExecutablePath { .. } | Self::UnreadableConfig { .. }
        )
    }
}

// Environment error creation methods
impl Error {
    /// Create an executable-path error
    pub fn executable_path(source: std::io::Error) -> Self {
        Self::ExecutablePath { source }
    }

    /// Create an unreadable-configuration error
    pub fn unreadable_config<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::UnreadableConfig {
            path: path.into(),
            source,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
