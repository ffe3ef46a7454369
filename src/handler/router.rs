//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route matching,
//! page rendering and access logging.

use crate::config::AppState;
use crate::error::FixtureError;
use crate::handler::faults;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::novel::ChapterId;
use crate::render;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Body returned for chapters that do not exist
pub const CHAPTER_NOT_FOUND: &str = "章节不存在";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
    pub user_agent: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    fn from_request<B>(req: &'a Request<B>) -> Self {
        let header = |name: &str| req.headers().get(name).and_then(|v| v.to_str().ok());
        Self {
            path: req.uri().path(),
            query: req.uri().query(),
            is_head: req.method() == Method::HEAD,
            if_none_match: header("if-none-match"),
            user_agent: header("user-agent"),
        }
    }
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    let entry = access_log.then(|| AccessLogEntry::from_request(&req, peer_addr));

    let response = match check_http_method(req.method(), state.config.http.enable_cors) {
        Some(resp) => resp,
        None => route_request(&RequestContext::from_request(&req), &state).await,
    };
    let response = http::with_server_header(response, &state.config.http.server_name);

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    // Health check endpoints (highest priority, always fast)
    let health = &state.config.health;
    if health.enabled && (ctx.path == health.liveness_path || ctx.path == health.readiness_path) {
        return http::build_health_response("ok", ctx.is_head);
    }

    match ctx.path {
        "/" | "/index.html" => serve_index(ctx, state),
        "/robots.txt" => {
            let text = render::render_robots(
                state.catalog.profile(),
                &state.config.robots,
                &state.base_url,
            );
            respond_cached(ctx, text, http::CONTENT_TYPE_TEXT)
        }
        "/sitemap.xml" => {
            let xml = render::render_sitemap(&state.catalog, &state.base_url);
            respond_cached(ctx, xml, http::CONTENT_TYPE_XML)
        }
        "/api/stats" => match render::render_stats(&state.catalog, &state.config.http.server_name)
        {
            Ok(json) => respond_cached(ctx, json, http::CONTENT_TYPE_JSON),
            Err(e) => {
                logger::log_error(&format!("Failed to serialize stats: {e}"));
                http::build_500_response(ctx.is_head)
            }
        },
        path => match path.strip_prefix("/chapter/") {
            Some(id) => serve_chapter(ctx, id, state).await,
            None => http::build_404_response("404 Not Found", ctx.is_head),
        },
    }
}

/// Table of contents, `?page=k` selects the page (default 1)
fn serve_index(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let number = match page_param(ctx.query) {
        Ok(n) => n,
        Err(e) => {
            logger::log_warning(&e.to_string());
            return http::build_400_response("page must be a positive integer", ctx.is_head);
        }
    };

    let page = state.catalog.page(number, state.page_size());
    let html = render::render_index(&state.catalog, &page);
    respond_cached(ctx, html, http::CONTENT_TYPE_HTML)
}

/// Extract `page` from the query string; a missing parameter means page 1
///
/// Keys and values are percent-decoded and the first `page` wins.
fn page_param(query: Option<&str>) -> crate::error::Result<usize> {
    let raw = query.and_then(|q| {
        q.split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| decode_component(key) == "page")
            .map(|(_, value)| decode_component(value))
    });

    match raw {
        None => Ok(1),
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| FixtureError::InvalidPage(value.into_owned())),
    }
}

fn decode_component(component: &str) -> Cow<'_, str> {
    percent_decode_str(component).decode_utf8_lossy()
}

async fn serve_chapter(
    ctx: &RequestContext<'_>,
    raw_id: &str,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let Ok(id) = raw_id.parse::<ChapterId>() else {
        return http::build_404_response(CHAPTER_NOT_FOUND, ctx.is_head);
    };
    let Some((position, chapter)) = state.catalog.get(&id) else {
        return http::build_404_response(CHAPTER_NOT_FOUND, ctx.is_head);
    };

    if let Some(response) = faults::apply(chapter.kind, ctx, &state.config.faults).await {
        return response;
    }

    let (prev, next) = state.catalog.neighbors(position);
    let html = render::render_chapter(&state.catalog, position, chapter, prev, next);
    respond_cached(ctx, html, http::CONTENT_TYPE_HTML)
}

/// 200 with an `ETag`, or 304 when the client already has this exact body
fn respond_cached(
    ctx: &RequestContext<'_>,
    content: String,
    content_type: &str,
) -> Response<Full<Bytes>> {
    let etag = http::generate_etag(content.as_bytes());
    if http::check_etag_match(ctx.if_none_match, &etag) {
        return http::build_304_response(&etag);
    }
    http::build_cached_response(content, content_type, &etag, ctx.is_head)
}
