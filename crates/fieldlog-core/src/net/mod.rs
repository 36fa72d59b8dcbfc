//! Connectivity probing.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpStream;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_PROBE_HOST: &str = "api.github.com";
const DEFAULT_PROBE_PORT: u16 = 443;

/// Advisory reachability check.
///
/// A `true` result never guarantees that a subsequent remote call will
/// succeed; DNS, TLS, auth, and rate-limit failures remain possible.
pub trait Connectivity {
    fn is_online(&self) -> impl Future<Output = bool> + Send;
}

/// Probe that attempts a bounded TCP connect to the remote API host.
///
/// A successful connect implies both link-layer connectivity and internet
/// reachability of the host we are about to talk to. Any failure, including
/// the timeout, reports offline rather than erroring.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
}

impl TcpProbe {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_HOST, DEFAULT_PROBE_PORT)
    }
}

impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        let address = (self.host.as_str(), self.port);
        match tokio::time::timeout(PROBE_TIMEOUT, TcpStream::connect(address)).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(error)) => {
                tracing::debug!(host = %self.host, %error, "connectivity probe failed");
                false
            }
            Err(_elapsed) => {
                tracing::debug!(host = %self.host, "connectivity probe timed out");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_port_reports_offline() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let probe = TcpProbe::new("192.0.2.1", 9);
        assert!(!probe.is_online().await);
    }

    #[tokio::test]
    async fn local_listener_reports_online() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let probe = TcpProbe::new("127.0.0.1", port);
        assert!(probe.is_online().await);
    }
}
