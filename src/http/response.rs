//! HTTP response building module
//!
//! Provides builders for the status codes the fixture emits, decoupled from page rendering.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, SERVER};
use hyper::{Response, StatusCode};

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const CONTENT_TYPE_XML: &str = "application/xml; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Build a 200 response carrying an `ETag`
///
/// HEAD requests get the same headers with an empty body.
pub fn build_cached_response(
    content: String,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .header("Cache-Control", "no-cache")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a plain response with the given status and content type
pub fn build_status_response(
    status: StatusCode,
    content_type: &str,
    content: String,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .header("Cache-Control", "no-cache")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response
pub fn build_400_response(message: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(
        StatusCode::BAD_REQUEST,
        CONTENT_TYPE_TEXT,
        format!("400 Bad Request: {message}"),
        is_head,
    )
}

/// Build 403 Forbidden response
pub fn build_403_response(message: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(
        StatusCode::FORBIDDEN,
        CONTENT_TYPE_TEXT,
        message.to_string(),
        is_head,
    )
}

/// Build 404 Not Found response
pub fn build_404_response(message: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(
        StatusCode::NOT_FOUND,
        CONTENT_TYPE_TEXT,
        message.to_string(),
        is_head,
    )
}

/// Build 500 Internal Server Error response
pub fn build_500_response(is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        CONTENT_TYPE_TEXT,
        "500 Internal Server Error".to_string(),
        is_head,
    )
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", CONTENT_TYPE_TEXT)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type, If-None-Match")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 302 redirect response
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", target)
        .header("Content-Type", CONTENT_TYPE_TEXT)
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build health check response (200 OK with plain text)
pub fn build_health_response(status: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(StatusCode::OK, CONTENT_TYPE_TEXT, status.to_string(), is_head)
}

/// Stamp the configured `Server` header onto a response
pub fn with_server_header(
    mut response: Response<Full<Bytes>>,
    server_name: &str,
) -> Response<Full<Bytes>> {
    if let Ok(value) = HeaderValue::from_str(server_name) {
        response.headers_mut().insert(SERVER, value);
    }
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let resp = build_cached_response("hello".to_string(), CONTENT_TYPE_HTML, "\"x\"", true);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["ETag"], "\"x\"");
        assert_eq!(body_string(resp).await, "");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let resp = build_404_response("章节不存在", false);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(resp).await, "章节不存在");
    }

    #[test]
    fn test_redirect_location() {
        let resp = build_redirect_response("/chapter/1");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers()["Location"], "/chapter/1");
    }

    #[test]
    fn test_options_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert!(build_options_response(false)
            .headers()
            .get("Access-Control-Allow-Origin")
            .is_none());
    }

    #[test]
    fn test_server_header() {
        let resp = with_server_header(build_health_response("ok", false), "NovelFixture/0.1");
        assert_eq!(resp.headers()[SERVER], "NovelFixture/0.1");
    }

    #[tokio::test]
    async fn test_health_head() {
        let resp = build_health_response("ok", true);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Length"], "2");
        assert_eq!(body_string(resp).await, "");
        assert_eq!(body_string(build_health_response("ok", false)).await, "ok");
    }
}
