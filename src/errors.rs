use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilestonError {
    /// Connection, DNS, TLS or read failure before a response body was decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from a Mileston service. The display form is the
    /// remote `message` field when the body carried one, otherwise the raw
    /// body text. Status code and decoded body are kept so callers can
    /// branch on them.
    #[error("{message}")]
    Remote {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type used across all Mileston client operations.
pub type MilestonResult<T> = Result<T, MilestonError>;
