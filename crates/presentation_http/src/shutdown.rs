//! Graceful shutdown with a drain deadline

use std::{future::Future, sync::Arc, time::Duration};

use tokio::{signal, sync::Notify};
use tracing::{error, info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// All connections finished
    Complete,
    /// The deadline passed with connections still open
    TimedOut,
}

/// Wait for SIGINT or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, shutting down...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, shutting down...");
        }
    }
}

/// Drive `server` to completion, giving up `timeout` after `signalled` fires
///
/// The deadline starts only once the shutdown signal has been observed.
pub async fn drain_within<F, E>(
    server: F,
    signalled: Arc<Notify>,
    timeout: Duration,
) -> Result<Drain, E>
where
    F: Future<Output = Result<(), E>>,
{
    let deadline = async {
        signalled.notified().await;
        info!("⏳ Draining connections for up to {:?}", timeout);
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => result.map(|()| Drain::Complete),
        () = deadline => {
            warn!(timeout_secs = timeout.as_secs(), "Shutdown deadline passed, closing open connections");
            Ok(Drain::TimedOut)
        }
    }
}
