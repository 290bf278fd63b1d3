//! axumサーバー起動・シャットダウンハンドリング

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::shutdown::ShutdownHandle;
use crate::AppState;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the configured address and serve until shutdown.
pub async fn run(state: AppState, config: &ServerConfig, shutdown: ShutdownHandle) -> ServerResult<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, state, shutdown).await
}

/// Serve on an already bound listener until shutdown.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: ShutdownHandle,
) -> ServerResult<()> {
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(ServerError::Serve)?;

    let app = crate::api::create_app(state);

    info!("Server Ready. Listening on port {}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .map_err(ServerError::Serve)?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal(shutdown: ShutdownHandle) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.triggered() => {
            info!("Shutdown requested, shutting down...");
        }
    }
}
