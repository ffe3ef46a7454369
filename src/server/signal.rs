// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Install shutdown handlers and return the notifier they trigger.
///
/// Signals are registered before this returns, so a registration failure is
/// reported to the caller instead of panicking inside the spawned task.
#[cfg(unix)]
pub fn start_signal_handler() -> std::io::Result<Arc<Notify>> {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::new(Notify::new());
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    logger::log_debug(&format!(
        "[Signal] SIGTERM/SIGINT handlers registered, pid {}",
        std::process::id()
    ));

    let notify = Arc::clone(&shutdown);
    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => logger::log_info("[Signal] SIGTERM received, shutting down"),
            _ = sigint.recv() => logger::log_info("[Signal] SIGINT received, shutting down"),
        }
        // notify_one stores a permit if the accept loop is not waiting yet
        notify.notify_one();
    });

    Ok(shutdown)
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler() -> std::io::Result<Arc<Notify>> {
    let shutdown = Arc::new(Notify::new());
    let notify = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_info("[Signal] Ctrl+C received, shutting down");
            notify.notify_one();
        }
    });
    Ok(shutdown)
}
