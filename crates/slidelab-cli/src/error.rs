//! Error type for the SlideLab CLI.

use std::io;

use thiserror::Error;

use slidelab_core::document::DocumentError;

use crate::config::ConfigError;

/// Everything that can stop the CLI before the output document is written
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse slide document: {}", err.message())]
    Parse {
        #[source]
        err: toml::de::Error,
        src: String,
    },

    #[error("Invalid slide document: {0}")]
    Document(#[from] DocumentError),

    #[error("Failed to write slide document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl CliError {
    /// Creates a parse error that keeps the document source for reporting.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        CliError::Parse {
            err,
            src: src.into(),
        }
    }
}
