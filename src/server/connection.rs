// Connection handling module
// Accepts a single TCP connection and serves it over HTTP/1.1

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::http;
use crate::logger;

/// Accept a connection, enforcing `performance.max_connections`.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment first, then check, so concurrent accepts cannot both slip under the limit
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// Serve one connection on the current `LocalSet`.
///
/// Each request is bounded by the larger of the read and write timeouts.
/// Waiting for the next request head is bounded by `keep_alive_timeout`
/// (or `read_timeout` when keep-alive is off).
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    if let Err(e) = stream.set_nodelay(true) {
        logger::log_debug(&format!("Failed to set TCP_NODELAY for {peer_addr}: {e}"));
    }

    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let request_timeout = Duration::from_secs(std::cmp::max(
            performance.read_timeout,
            performance.write_timeout,
        ));
        let keep_alive = performance.keep_alive_timeout > 0;
        let header_timeout = Duration::from_secs(if keep_alive {
            performance.keep_alive_timeout
        } else {
            performance.read_timeout
        });

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .header_read_timeout(header_timeout)
            .keep_alive(keep_alive);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&service_state);
                serve_with_deadline(req, state, peer_addr, request_timeout)
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Run the handler, answering 503 if it does not finish within `deadline`
async fn serve_with_deadline<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
    deadline: Duration,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let is_head = req.method() == Method::HEAD;
    let path = req.uri().path().to_string();
    let server_name = state.config.http.server_name.clone();

    match tokio::time::timeout(deadline, handler::handle_request(req, state, peer_addr)).await {
        Ok(result) => result,
        Err(_) => {
            logger::log_warning(&format!(
                "Request {path} from {peer_addr} timed out after {} seconds",
                deadline.as_secs()
            ));
            let response = http::build_status_response(
                StatusCode::SERVICE_UNAVAILABLE,
                http::CONTENT_TYPE_TEXT,
                "503 Service Unavailable".to_string(),
                is_head,
            );
            Ok(http::with_server_header(response, &server_name))
        }
    }
}
