//! Fault chapter behaviors
//!
//! Chapters of the complex profile that deliberately misbehave so the crawler's
//! retry, redirect and anti-bot handling can be exercised.

use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::router::RequestContext;
use crate::config::FaultConfig;
use crate::http;
use crate::logger;
use crate::novel::ChapterKind;

/// Minimum User-Agent length accepted by the `user_agent` chapter
const MIN_USER_AGENT_LEN: usize = 10;

/// Apply the fault for `kind`, if any
///
/// Returns `Some(response)` when the fault replaces the chapter page.
/// Delay faults sleep and then return `None` so the page renders normally.
pub async fn apply(
    kind: ChapterKind,
    ctx: &RequestContext<'_>,
    faults: &FaultConfig,
) -> Option<Response<Full<Bytes>>> {
    if !faults.enabled {
        return None;
    }

    let response = match kind {
        ChapterKind::Error404 => Some(http::build_404_response("404 Not Found", ctx.is_head)),
        ChapterKind::Error500 => Some(http::build_500_response(ctx.is_head)),
        ChapterKind::Timeout => {
            tokio::time::sleep(Duration::from_millis(faults.timeout_delay_ms)).await;
            None
        }
        ChapterKind::RateLimit => {
            tokio::time::sleep(Duration::from_millis(faults.rate_limit_delay_ms)).await;
            None
        }
        ChapterKind::Redirect => Some(http::build_redirect_response("/chapter/1")),
        ChapterKind::AntiCrawler if looks_like_script(ctx.user_agent) => {
            Some(http::build_403_response("403 Forbidden", ctx.is_head))
        }
        ChapterKind::UserAgent
            if ctx
                .user_agent
                .map_or(true, |ua| ua.chars().count() < MIN_USER_AGENT_LEN) =>
        {
            Some(http::build_403_response("请使用有效的浏览器访问", ctx.is_head))
        }
        _ => return None,
    };

    logger::log_fault_injected(ctx.path, kind.as_str());
    response
}

/// Scripted clients identify themselves with library names
fn looks_like_script(user_agent: Option<&str>) -> bool {
    user_agent.is_some_and(|ua| {
        let ua = ua.to_ascii_lowercase();
        ua.contains("python") || ua.contains("requests")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn ctx(user_agent: Option<&str>) -> RequestContext<'_> {
        RequestContext {
            path: "/chapter/1",
            query: None,
            is_head: false,
            if_none_match: None,
            user_agent,
        }
    }

    fn faults() -> FaultConfig {
        FaultConfig {
            enabled: true,
            timeout_delay_ms: 5,
            rate_limit_delay_ms: 5,
        }
    }

    #[tokio::test]
    async fn test_status_faults() {
        let c = ctx(Some("Mozilla/5.0 (X11; Linux x86_64)"));
        let resp = apply(ChapterKind::Error404, &c, &faults()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = apply(ChapterKind::Error500, &c, &faults()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let resp = apply(ChapterKind::Redirect, &c, &faults()).await.unwrap();
        assert_eq!(resp.headers()["Location"], "/chapter/1");
    }

    #[tokio::test]
    async fn test_anti_crawler() {
        let script = ctx(Some("python-requests/2.31"));
        let blocked = apply(ChapterKind::AntiCrawler, &script, &faults()).await;
        assert_eq!(blocked.unwrap().status(), StatusCode::FORBIDDEN);
        let allowed = apply(ChapterKind::AntiCrawler, &ctx(Some("Mozilla/5.0")), &faults()).await;
        assert!(allowed.is_none());
        assert!(apply(ChapterKind::AntiCrawler, &ctx(None), &faults()).await.is_none());
    }

    #[tokio::test]
    async fn test_user_agent_gate() {
        assert!(apply(ChapterKind::UserAgent, &ctx(None), &faults()).await.is_some());
        assert!(apply(ChapterKind::UserAgent, &ctx(Some("curl/8")), &faults()).await.is_some());
        let browser = ctx(Some("Mozilla/5.0 Firefox"));
        assert!(apply(ChapterKind::UserAgent, &browser, &faults()).await.is_none());
    }

    #[tokio::test]
    async fn test_delays_render_normally() {
        let c = ctx(None);
        assert!(apply(ChapterKind::Timeout, &c, &faults()).await.is_none());
        assert!(apply(ChapterKind::RateLimit, &c, &faults()).await.is_none());
        assert!(apply(ChapterKind::Captcha, &c, &faults()).await.is_none());
    }

    #[tokio::test]
    async fn test_disabled_faults() {
        let mut cfg = faults();
        cfg.enabled = false;
        assert!(apply(ChapterKind::Error500, &ctx(None), &cfg).await.is_none());
    }
}
