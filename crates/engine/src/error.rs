use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot use -c, -d and -u flags together")]
    ConflictingModes,

    #[error("Failed to open input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// True for errors raised while resolving the configuration, before any I/O.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::ConflictingModes | Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
