use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open input '{path}': {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read a line from '{source_name}': {source}")]
    LineRead {
        source_name: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output file '{path}', its values will not be written: {source}")]
    SinkCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{value}' to '{path}': {source}")]
    LineWrite {
        value: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to close output file '{path}': {source}")]
    SinkClose {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
