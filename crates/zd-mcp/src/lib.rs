//! zd-mcp: MCP tool runtime — server, tool registry, registry tools, transports.

pub mod protocol;
pub mod registry;
pub mod server;
pub mod tools;
pub mod transport;

use protocol::{INTERNAL_ERROR, INVALID_PARAMS};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code reported to the client.
    pub fn code(&self) -> i64 {
        match self {
            McpError::ToolNotFound(_) | McpError::InvalidParams(_) => INVALID_PARAMS,
            _ => INTERNAL_ERROR,
        }
    }
}
