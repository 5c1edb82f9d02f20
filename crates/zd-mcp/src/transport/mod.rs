//! Transports carrying JSON-RPC messages between MCP clients and the server.

pub mod sse;
pub mod stdio;
