use thiserror::Error;

pub type AttributionResult<T> = Result<T, AttributionError>;

/// Errors raised around the classifier: configuration, record decoding and
/// label parsing. Classification itself never fails.
#[derive(Error, Debug)]
pub enum AttributionError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Malformed visit record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown channel label: {0:?}")]
    UnknownChannel(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
