//! HTTP server startup logic.
//!
//! Plain HTTP on `0.0.0.0:<port>`. There is no shutdown handling: the
//! process runs until the OS terminates it.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::HttpServerConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

/// Binds the listener described by `config`.
///
/// Exposed separately from [`serve`] so callers can bind before serving,
/// and so a bind failure is reported without starting anything.
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

/// Start the HTTP server based on configuration.
///
/// Logs the listening address and `version` once bound. This function
/// blocks until the server stops.
pub async fn start_server(
    app: Router,
    config: &HttpServerConfig,
    version: &str,
) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    let addr = listener
        .local_addr()
        .unwrap_or_else(|_| config.socket_addr());

    tracing::info!(%addr, version = %version, "Starting HTTP server");

    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    #[tokio::test]
    async fn bind_reports_address_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = HttpServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: taken.local_addr().unwrap().port(),
        };

        let err = bind(&config).await.unwrap_err();
        match err {
            ServerError::Bind { addr, source } => {
                assert_eq!(addr, config.socket_addr());
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bind_uses_configured_port() {
        let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let config = HttpServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
        };
        let listener = bind(&config).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port);
    }
}
