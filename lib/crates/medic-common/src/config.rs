use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// Agent server configuration, read from `MEDIC_SERVER_*` variables.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Listen address (default: 127.0.0.1:8000)
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// When set, requests must carry a matching `X-API-Key` header.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Probe settings file; falls back to the CLI's default location.
    #[serde(default)]
    pub config: Option<PathBuf>,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            api_key: None,
            config: None,
        }
    }
}
