//! Request middleware.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::ratelimit::{RateDecision, RateLimiter};

use super::dto::ErrorResponse;

/// Header reporting how many requests remain in the current window.
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Identify the client behind a request.
///
/// Uses the peer address, or `"unknown"` when there is none. With
/// `trust_forwarded_for` set, the first `X-Forwarded-For` entry wins when a
/// proxy supplied one.
pub fn client_key(req: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for && let Some(client) = forwarded_for(req) {
        return client;
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn forwarded_for(req: &Request) -> Option<String> {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Reject clients that have exceeded their request budget.
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_key(&req, limiter.trusts_forwarded_for());

    match limiter.check(&client).await {
        RateDecision::Allowed { remaining } => {
            let mut response = next.run(req).await;
            response
                .headers_mut()
                .insert(REMAINING_HEADER, HeaderValue::from(remaining));
            response
        }
        RateDecision::Limited { retry_after } => {
            warn!(%client, "rate limit exceeded");
            let body = Json(ErrorResponse {
                error: "Too many requests, please try again later".to_string(),
            });
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after.as_secs().to_string())],
                body,
            )
                .into_response()
        }
    }
}
