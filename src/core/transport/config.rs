//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8000;

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
    fn default() -> Self {
        Self::Tcp(TcpConfig::default())
    }

    #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

/// Host bound when the port is injected by a hosting platform.
#[cfg(feature = "http")]
const PLATFORM_HOST: &str = "0.0.0.0";

/// Read a port from the first of `vars` that is set and parses, along with
/// the variable it came from.
#[cfg(any(feature = "tcp", feature = "http"))]
fn port_from_env(vars: &[&'static str]) -> Option<(&'static str, u16)> {
    vars.iter().find_map(|&var| {
        std::env::var(var)
            .ok()
            .and_then(|p| p.parse().ok())
            .map(|port| (var, port))
    })
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create a TCP transport config.
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` selects the transport. The HTTP port comes from
    /// `MCP_HTTP_PORT`, falling back to `PORT` as set by hosting platforms.
    /// A port taken from `PORT` must be reachable from outside the container,
    /// so the host then defaults to `0.0.0.0` instead of `127.0.0.1`;
    /// `MCP_HTTP_HOST` overrides either default.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => {
                let port = port_from_env(&["MCP_TCP_PORT"]).map_or(DEFAULT_TCP_PORT, |(_, p)| p);
                let host = std::env::var("MCP_TCP_HOST").unwrap_or_else(|_| default_host());
                Self::Tcp(TcpConfig { port, host })
            }
            #[cfg(feature = "http")]
            "http" => {
                let (port, host) = match port_from_env(&["MCP_HTTP_PORT", "PORT"]) {
                    Some(("PORT", port)) => (port, PLATFORM_HOST.to_string()),
                    Some((_, port)) => (port, default_host()),
                    None => (DEFAULT_HTTP_PORT, default_host()),
                };
                let host = std::env::var("MCP_HTTP_HOST").unwrap_or(host);
                let rpc_path =
                    std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
                let enable_cors = std::env::var("MCP_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true);
                Self::Http(HttpConfig {
                    port,
                    host,
                    rpc_path,
                    enable_cors,
                })
            }
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        assert_eq!(TransportConfig::default(), TransportConfig::stdio());
        assert_eq!(
            TransportConfig::default().description(),
            "STDIO (standard MCP mode)"
        );
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "carrier-pigeon");
        }
        assert_eq!(TransportConfig::from_env(), TransportConfig::Stdio);
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
        }
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "TCP");
            std::env::set_var("MCP_TCP_PORT", "4100");
        }
        assert_eq!(
            TransportConfig::from_env(),
            TransportConfig::tcp(4100, "127.0.0.1")
        );
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_TCP_PORT");
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_port_falls_back_to_platform_port() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "http");
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("MCP_HTTP_HOST");
            std::env::set_var("PORT", "10000");
        }
        match TransportConfig::from_env() {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 10000);
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.rpc_path, "/mcp");
            }
            other => panic!("Expected HTTP config, got {:?}", other),
        }

        unsafe {
            std::env::set_var("MCP_HTTP_HOST", "10.0.0.5");
        }
        match TransportConfig::from_env() {
            TransportConfig::Http(cfg) => assert_eq!(cfg.host, "10.0.0.5"),
            other => panic!("Expected HTTP config, got {:?}", other),
        }

        unsafe {
            std::env::remove_var("MCP_HTTP_HOST");
            std::env::set_var("MCP_HTTP_PORT", "9001");
        }
        match TransportConfig::from_env() {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 9001);
                assert_eq!(cfg.host, "127.0.0.1");
            }
            other => panic!("Expected HTTP config, got {:?}", other),
        }

        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("PORT");
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_description() {
        assert_eq!(
            TransportConfig::http(8000, "0.0.0.0").description(),
            "HTTP on 0.0.0.0:8000/mcp"
        );
    }
}
