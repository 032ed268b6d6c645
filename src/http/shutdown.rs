//! Graceful shutdown and signal handling.
//!
//! Container platforms send SIGTERM before replacing a revision; a local run
//! is usually stopped with Ctrl+C. Either one drains the server through its
//! `Handle`.

use std::time::Duration;

use axum_server::Handle;
use tokio::task::JoinHandle;

/// The signal that ended serving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

/// Spawn a task that drains `handle` once SIGINT or SIGTERM arrives.
///
/// The returned task resolves to the signal that was received. Abort it if
/// the server stops for another reason.
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) -> JoinHandle<ShutdownSignal> {
    tokio::spawn(async move {
        let signal = wait_for_signal().await;
        drain(&handle, grace, signal);
        signal
    })
}

/// Stop accepting connections and give in-flight requests `grace` to finish.
pub fn drain(handle: &Handle, grace: Duration, signal: ShutdownSignal) {
    tracing::info!(
        signal = signal.name(),
        grace_secs = grace.as_secs(),
        in_flight = handle.connection_count(),
        "Draining connections before shutdown"
    );
    handle.graceful_shutdown(Some(grace));
}

async fn wait_for_signal() -> ShutdownSignal {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Could not listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => ShutdownSignal::Interrupt,
        _ = terminate => ShutdownSignal::Terminate,
    }
}
