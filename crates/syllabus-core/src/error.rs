//! Error types for Syllabus.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading, parsing or writing curriculum documents.
///
/// Only failures that must abort an operation live here. Malformed sections
/// inside an otherwise valid document are reported as warnings by the
/// content crate and never surface as an `Error`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The metadata header exists but is not valid structured data
    #[error("Header decode error: {message}")]
    HeaderDecode {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error while reading or writing a document
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path of the document involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document could not be turned back into text
    #[error("Render error: {message}")]
    Render {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Syllabus operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new header decode error with a message.
    pub fn header_decode<S: Into<String>>(message: S) -> Self {
        Error::HeaderDecode {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new header decode error with a message and source error.
    pub fn header_decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::HeaderDecode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an I/O error tagged with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a render error with a message and source error.
    pub fn render_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Render {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error came from decoding a document header.
    pub fn is_header_decode(&self) -> bool {
        matches!(self, Error::HeaderDecode { .. })
    }
}
