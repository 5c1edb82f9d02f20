//! zd-registry: Client for the Zendesign component registry.
//!
//! Every operation issues exactly one GET against the registry origin and
//! either returns a typed payload or one of two failure kinds. The
//! [`envelope`] module folds those outcomes into the JSON results handed to
//! tool callers.

pub mod client;
pub mod envelope;
pub mod timeout;

pub use client::{RegistryClient, RegistryConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Connection, DNS, timeout, or non-2xx status from the upstream call.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Anything that went wrong handling a response that did arrive.
    #[error("processing failure: {0}")]
    Processing(String),
}

impl RegistryError {
    /// The underlying cause, without the kind prefix.
    pub fn cause(&self) -> &str {
        match self {
            RegistryError::Transport(cause) | RegistryError::Processing(cause) => cause,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RegistryError::Transport(_))
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        RegistryError::Transport(error_chain(&e))
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Processing(e.to_string())
    }
}

/// Errors raised while constructing a [`RegistryClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid registry base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Render an error together with its sources, e.g.
/// "error sending request: connection refused".
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
