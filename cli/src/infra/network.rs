//! Network infrastructure: implements `NetworkProbe` using `spawn_blocking`.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::NetworkProbe;

/// Production implementation that performs real network checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioNetworkProbe;

impl NetworkProbe for TokioNetworkProbe {
    async fn check_tcp_connectivity(&self, address: &str, timeout: Duration) -> Result<bool> {
        let addr = address.to_string();
        let probe = tokio::task::spawn_blocking(move || connect_any(&addr, timeout));
        // Resolution has no timeout of its own; bound the whole attempt.
        match tokio::time::timeout(timeout, probe).await {
            Ok(joined) => joined.map_err(|e| anyhow::anyhow!("spawn_blocking panicked: {e}")),
            Err(_) => {
                tracing::debug!(address, "reachability probe timed out");
                Ok(false)
            }
        }
    }
}

fn connect_any(address: &str, timeout: Duration) -> bool {
    let addrs = match address.to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            tracing::debug!(address, error = %e, "address resolution failed");
            return false;
        }
    };
    addrs
        .into_iter()
        .any(|addr| TcpStream::connect_timeout(&addr, timeout).is_ok())
}
