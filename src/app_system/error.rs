use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the view actors and the page controllers on top of them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViewError {
    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),
    #[error("Order not found among loaded orders: {0}")]
    UnknownOrder(String),
    #[error("Orders have not been loaded yet")]
    NotLoaded,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors from the data source and mutation collaborators.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with HTTP {0}")]
    Status(u16),
    /// Messages reported by the GraphQL server, joined with `"; "`.
    #[error("{0}")]
    GraphQl(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Response contained no data for {0}")]
    MissingData(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
