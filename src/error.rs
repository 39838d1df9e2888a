//! Error types for the pacq crate

use thiserror::Error;

/// Main error type for the pacq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal actions available after removing the stop action")]
    NoLegalActions,

    #[error("unknown agent option '{name}'")]
    UnknownOption { name: String },

    #[error("invalid value '{value}' for agent option '{name}'")]
    InvalidOptionValue { name: String, value: String },

    #[error("malformed agent option '{input}' (expected 'key=value')")]
    MalformedOption { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
