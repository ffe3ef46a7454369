// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop on `listener`.
///
/// Must be polled inside a `tokio::task::LocalSet`: every connection is
/// served with `spawn_local`. Returns once `shutdown` is notified; in-flight
/// connections keep running on the `LocalSet` until it is dropped.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => {
                logger::log_server_stop(&local_addr);
                return Ok(());
            }
        }
    }
}
