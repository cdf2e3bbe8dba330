//! Error type for decoding, export and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("record {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field '{field}' holds a non-finite number")]
    NonFinite { field: &'static str },

    #[error("input contains no records")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("delimiter {0:?} is not a single-byte character")]
    InvalidDelimiter(char),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
