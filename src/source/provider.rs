use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

/// Why a deck could not be loaded.
/// Every variant ends the same way: an empty deck and a log line.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Local file could not be read.
    Io(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, message: String },
    /// The body was not valid JSON.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "I/O error: {msg}"),
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
            LoadError::Status { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            LoadError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// A place the cards document can be fetched from.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// Short description for logs and the empty screen (a path or URL).
    fn describe(&self) -> &str;

    /// Fetches and parses the raw document. Shape checks happen later in the
    /// normalizer, so any valid JSON is returned as-is.
    async fn fetch(&self) -> Result<Value, LoadError>;
}

/// Parses a response body into JSON, mapping failures to `LoadError::Parse`.
pub(crate) fn parse_body(body: &str) -> Result<Value, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}
