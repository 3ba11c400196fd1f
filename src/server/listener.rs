//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::routes::create_router;
use crate::state::AppState;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Open the listening socket.
///
/// Fails if the address is already in use or otherwise unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the router on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind to the configured address and serve the application.
///
/// This function blocks until the server stops.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = bind(addr).await?;
    let local = listener.local_addr().unwrap_or(addr);

    tracing::info!(
        addr = %local,
        page = %config.page_path.display(),
        "App listening at http://localhost:{}",
        local.port()
    );

    let app = create_router(AppState::new(config));
    serve(listener, app).await
}
