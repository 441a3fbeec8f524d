use std::net::SocketAddr;

use axum::Router;
use axum::routing::{any, get, post};

use super::*;
use crate::config::ServerConfig;

// =============================================================================
// Helpers
// =============================================================================

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn proxy_router(upstream_url: String) -> Router {
    let config = ServerConfig { port: 0, upstream_url, upstream_timeout_secs: 5 };
    let state = AppState::new(&config).unwrap();
    Router::new().route("/api/{*rest}", any(forward)).with_state(state)
}

/// Stand-in for the remote auth API.
fn fake_upstream() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|body: String| async move { (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body) }),
        )
        .route(
            "/api/profile",
            get(|headers: HeaderMap| async move {
                match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
                    Some("Bearer tok123") => (
                        StatusCode::OK,
                        [(CONTENT_TYPE, "application/json")],
                        r#"{"fullName":"A B","email":"a@b.com","role":"admin"}"#,
                    )
                        .into_response(),
                    _ => StatusCode::UNAUTHORIZED.into_response(),
                }
            }),
        )
        .route("/api/echo-query", get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }))
        .route("/api/moved", get(|| async { (StatusCode::FOUND, [(LOCATION, "/api/profile")]) }))
        .route(
            "/api/guarded",
            get(|| async { (StatusCode::UNAUTHORIZED, [(WWW_AUTHENTICATE, "Bearer realm=\"api\"")]) }),
        )
        .route("/internal/secret", get(|| async { "SECRET" }))
}

// =============================================================================
// pure helpers
// =============================================================================

#[test]
fn upstream_url_joins_base_and_rest() {
    assert_eq!(upstream_url("http://up:5000/", "auth/login", None), "http://up:5000/api/auth/login");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(upstream_url("http://up", "profile", Some("a=1&b=2")), "http://up/api/profile?a=1&b=2");
    assert_eq!(upstream_url("http://up", "profile", Some("")), "http://up/api/profile");
}

#[test]
fn api_rest_keeps_the_encoded_path() {
    assert_eq!(api_rest("/api/auth/login"), Some("auth/login"));
    assert_eq!(api_rest("/api/users/a%20b"), Some("users/a%20b"));
    assert_eq!(api_rest("/apix/profile"), None);
}

#[test]
fn api_rest_refuses_dot_segments() {
    for path in ["/api/..", "/api/auth/../../x", "/api/%2e%2e/x", "/api/.%2E/x", "/api/%2E/x", "/api/./x"] {
        assert_eq!(api_rest(path), None, "{path}");
    }
}

#[test]
fn api_rest_refuses_encoded_separators() {
    for path in ["/api/%2E%2E%2Finternal%2Fsecret", "/api/a%2fb", "/api/a%5Cb", "/api/a\\b"] {
        assert_eq!(api_rest(path), None, "{path}");
    }
}

#[test]
fn only_allow_listed_headers_are_forwarded() {
    assert!(is_forwardable(&AUTHORIZATION));
    assert!(is_forwardable(&CONTENT_TYPE));
    assert!(is_forwardable(&ACCEPT));
    assert!(!is_forwardable(&axum::http::header::COOKIE));
    assert!(!is_forwardable(&axum::http::header::HOST));
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn forwards_body_and_relays_response() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{proxy}/api/auth/login"))
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"email":"a@b.com","password":"Secret1"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(resp.text().await.unwrap(), r#"{"email":"a@b.com","password":"Secret1"}"#);
}

#[tokio::test]
async fn forwards_bearer_header() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;
    let client = reqwest::Client::new();

    let authorized = client
        .get(format!("http://{proxy}/api/profile"))
        .header(AUTHORIZATION, "Bearer tok123")
        .send()
        .await
        .unwrap();
    assert_eq!(authorized.status(), StatusCode::OK);

    let anonymous = client.get(format!("http://{proxy}/api/profile")).send().await.unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn forwards_query_string() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;

    let resp = reqwest::get(format!("http://{proxy}/api/echo-query?x=1")).await.unwrap();
    assert_eq!(resp.text().await.unwrap(), "x=1");
}

#[tokio::test]
async fn unknown_upstream_path_status_is_relayed() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;

    let resp = reqwest::get(format!("http://{proxy}/api/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let proxy = spawn(proxy_router(format!("http://{closed}"))).await;

    let resp = reqwest::get(format!("http://{proxy}/api/profile")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn encoded_traversal_is_refused() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;

    let resp = reqwest::get(format!("http://{proxy}/api/%2E%2E%2Finternal%2Fsecret")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_ne!(resp.text().await.unwrap(), "SECRET");
}

#[tokio::test]
async fn redirect_location_is_relayed() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;
    let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build().unwrap();

    let resp = client.get(format!("http://{proxy}/api/moved")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/api/profile");
}

#[tokio::test]
async fn auth_challenge_is_relayed() {
    let upstream = spawn(fake_upstream()).await;
    let proxy = spawn(proxy_router(format!("http://{upstream}"))).await;

    let resp = reqwest::get(format!("http://{proxy}/api/guarded")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get(WWW_AUTHENTICATE).unwrap(), "Bearer realm=\"api\"");
}
