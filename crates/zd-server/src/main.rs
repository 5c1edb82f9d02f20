//! Zendesign MCP server entry point.

mod config;

use anyhow::Result;
use clap::Parser;
use config::{Args, ServerConfig, TransportKind};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use zd_mcp::registry::ToolRegistry;
use zd_mcp::server::{McpServer, SERVER_NAME};
use zd_mcp::tools::register_registry_tools;
use zd_mcp::transport::{sse, stdio};
use zd_registry::RegistryClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the stdio transport, so logs always go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env().with_args(&args);
    tracing::info!(
        registry = %config.registry.base_url,
        timeout = ?config.registry.timeout,
        "starting {SERVER_NAME}"
    );

    let client = RegistryClient::new(config.registry.clone())?;
    let mut tools = ToolRegistry::new();
    register_registry_tools(&mut tools, client);
    let server = Arc::new(McpServer::new(
        SERVER_NAME,
        env!("CARGO_PKG_VERSION"),
        tools,
    ));
    tracing::info!("{} tools registered", server.tool_count());

    match config.transport {
        TransportKind::Sse => sse::serve(server, config.socket_addr()).await?,
        TransportKind::Stdio => stdio::serve(&server).await?,
    }
    Ok(())
}
