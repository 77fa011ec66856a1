//! HTTP server startup and shutdown.
//!
//! Binds the listening socket, announces the endpoint, and serves until a
//! termination signal arrives. A bind failure is returned to the caller and
//! ends the process; there is no state to protect, so nothing is retried.

use std::io;
use std::net::SocketAddr;

use axum::Router;

use crate::config::{LISTEN_ADDR, LISTEN_PORT};

/// Server startup error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

/// The fixed address the server listens on.
fn listen_addr() -> SocketAddr {
    SocketAddr::new(LISTEN_ADDR, LISTEN_PORT)
}

/// Start the HTTP server on the fixed listen address.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let addr = listen_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Server running on http://localhost:{}", LISTEN_PORT);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGTERM or Ctrl+C is received.
///
/// Once the signal fires, the server stops accepting new connections and
/// drains the existing ones before returning.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_all_interfaces_port_5000() {
        let expected: SocketAddr = "0.0.0.0:5000".parse().unwrap();
        assert_eq!(listen_addr(), expected);
    }
}
