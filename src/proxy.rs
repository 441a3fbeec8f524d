//! Same-origin forwarding of `/api/*` to the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app always calls its own origin. This handler relays each
//! request upstream unchanged apart from a header allow-list, and relays the
//! upstream status and body back. It never inspects tokens or payloads; the
//! upstream API is the only authority on credentials.
//!
//! The upstream path is the raw, still-encoded request path. Segments that a
//! URL parser would resolve as `.` or `..`, or that smuggle an encoded
//! separator, are refused so a request can never leave the `/api` prefix.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{OriginalUri, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LOCATION, WWW_AUTHENTICATE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers passed through to the upstream API.
const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Upstream response headers relayed back to the browser.
const RELAYED_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, LOCATION, WWW_AUTHENTICATE];

fn is_forwardable(name: &HeaderName) -> bool {
    FORWARDED_HEADERS.contains(name)
}

/// The encoded path after `/api/`, or `None` if any segment is unsafe.
fn api_rest(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/api/")?;
    rest.split('/').all(is_plain_segment).then_some(rest)
}

fn is_plain_segment(segment: &str) -> bool {
    let lower = segment.to_ascii_lowercase();
    let dots = lower.replace("%2e", ".");
    dots != "." && dots != ".." && !lower.contains("%2f") && !lower.contains("%5c") && !segment.contains('\\')
}

/// Build the upstream URL for `/api/<rest>?<query>`.
fn upstream_url(base: &str, rest: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", base.trim_end_matches('/'), rest.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/{*rest}`
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(rest) = api_rest(uri.path()) else {
        tracing::warn!(%method, path = %uri.path(), "refusing unsafe api path");
        return StatusCode::BAD_REQUEST.into_response();
    };
    let url = upstream_url(&state.upstream_url, rest, query.as_deref());

    let mut request = state.http.request(method.clone(), &url).body(body);
    for (name, value) in headers.iter().filter(|(name, _)| is_forwardable(name)) {
        request = request.header(name.clone(), value.clone());
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, path = %rest, error = %e, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream.status();
    let relayed: Vec<_> = RELAYED_HEADERS
        .iter()
        .filter_map(|name| upstream.headers().get(name).map(|value| (name.clone(), value.clone())))
        .collect();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, path = %rest, error = %e, "upstream body read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };
    tracing::debug!(%method, path = %rest, %status, "proxied api request");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().extend(relayed);
    response
}
