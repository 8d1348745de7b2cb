//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::{lookup_host, TcpListener};

use crate::config::HttpServerConfig;
use crate::error::ServerError;

/// A bound listener that has not started accepting connections yet.
///
/// Only a successful bind produces one, so serving without a socket cannot
/// be expressed.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Resolve `host:port` and bind it. No retry, no fallback port.
    pub async fn bind(config: &HttpServerConfig) -> Result<Self, ServerError> {
        let addr = config.address();

        let resolved = lookup_host(&addr)
            .await
            .map_err(|source| ServerError::Resolve {
                addr: addr.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| ServerError::Resolve {
                addr: addr.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no addresses returned",
                ),
            })?;

        let inner = TcpListener::bind(resolved)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = inner.local_addr().map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        tracing::debug!(%addr, %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// The bound address; a configured port of 0 shows the assigned port here.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve `app` on this listener. Each connection runs as its own task.
    ///
    /// Returns only if the accept loop fails.
    pub async fn serve(self, app: Router) -> Result<(), ServerError> {
        tracing::info!(addr = %self.local_addr, "Starting HTTP server (no TLS)");

        axum::serve(self.inner, app).await?;
        Ok(())
    }
}
