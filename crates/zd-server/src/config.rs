//! Server configuration — environment variables, overridden by CLI flags.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use zd_registry::RegistryConfig;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// HTTP Server-Sent Events on `host:port`.
    Sse,
    /// Newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
}

#[derive(Debug, Parser)]
#[command(name = "zendesign-mcp")]
#[command(about = "MCP server exposing the Zendesign component registry as tools", long_about = None)]
pub struct Args {
    /// Transport to serve on
    #[arg(short, long, value_enum, default_value = "sse")]
    pub transport: TransportKind,

    /// Bind address for the SSE transport [env: ZENDESIGN_HOST]
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port for the SSE transport [env: PORT]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Registry origin [env: ZENDESIGN_BASE_URL]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds [env: ZENDESIGN_TIMEOUT_SECS]
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub transport: TransportKind,
    pub host: IpAddr,
    pub port: u16,
    pub registry: RegistryConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Sse,
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            registry: RegistryConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = parse_var(&lookup, "ZENDESIGN_HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT") {
            config.port = port;
        }
        if let Some(base_url) = lookup("ZENDESIGN_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.registry.base_url = base_url.trim().to_string();
        }
        if let Some(secs) = parse_var(&lookup, "ZENDESIGN_TIMEOUT_SECS") {
            config.registry.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Flags win over the environment.
    pub fn with_args(mut self, args: &Args) -> Self {
        self.transport = args.transport;
        if let Some(host) = args.host {
            self.host = host;
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(base_url) = &args.base_url {
            self.registry.base_url = base_url.clone();
        }
        if let Some(secs) = args.timeout_secs {
            self.registry.timeout = Duration::from_secs(secs);
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse an optional variable; unparsable values are logged and ignored.
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring invalid {key}={raw:?}, using default");
            None
        }
    }
}
