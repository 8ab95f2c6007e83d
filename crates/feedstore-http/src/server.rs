//! Listener loop with graceful shutdown.

use crate::routes::router;
use crate::state::AppState;
use tokio::net::TcpListener;

/// Serve the feed API on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, caller_header = %state.caller_header(), "feedstore listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("feedstore stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(err) => {
            // Without a signal handler we can only run until killed.
            tracing::error!(%err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
