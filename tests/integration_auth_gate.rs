mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Router, middleware};
use chrono::Utc;
use common::{InMemoryUsers, body_json, get_request, setup_test_app, test_state, test_tokens};
use rekap::middleware::auth::{AuthUser, require_auth};
use rekap_auth::Principal;
use serde_json::json;
use tower::ServiceExt;

/// A gated route that records whether its handler ran.
fn probe_app() -> (Router, Arc<AtomicBool>) {
    let reached = Arc::new(AtomicBool::new(false));
    let state = test_state(Arc::new(InMemoryUsers::default()));

    let app = Router::new()
        .route(
            "/probe",
            get(|Extension(flag): Extension<Arc<AtomicBool>>, user: AuthUser| async move {
                flag.store(true, Ordering::SeqCst);
                user.email().to_string()
            }),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(Extension(reached.clone()))
        .with_state(state);

    (app, reached)
}

fn principal() -> Principal {
    Principal::new(5, "kasir@rekap.test").with_branch(Some(3))
}

async fn assert_rejected(authorization: Option<&str>, expected: &str) {
    let (app, reached) = probe_app();

    let response = app
        .oneshot(get_request("/probe", authorization))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": expected }));
    assert!(!reached.load(Ordering::SeqCst), "handler must not run");
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    assert_rejected(None, "Authorization header is missing").await;
}

#[tokio::test]
async fn test_header_without_bearer_is_rejected() {
    let token = test_tokens().issue_access_token(&principal()).unwrap();

    assert_rejected(
        Some(&token),
        "Invalid Authorization format, use: Bearer <token>",
    )
    .await;
    assert_rejected(
        Some(&format!("Token {token}")),
        "Invalid Authorization format, use: Bearer <token>",
    )
    .await;
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let two_hours_ago = Utc::now().timestamp() - 2 * 60 * 60;
    let token = test_tokens()
        .issue_access_token_at(&principal(), two_hours_ago)
        .unwrap();

    assert_rejected(
        Some(&format!("Bearer {token}")),
        "Token is invalid or expired",
    )
    .await;
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let token = test_tokens().issue_refresh_token(&principal()).unwrap();

    assert_rejected(
        Some(&format!("Bearer {token}")),
        "Token is invalid or expired",
    )
    .await;
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let token = test_tokens().issue_access_token(&principal()).unwrap();
    let mut tampered = token.into_bytes();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == b'Q' { b'g' } else { b'Q' };
    let tampered = String::from_utf8(tampered).unwrap();

    assert_rejected(
        Some(&format!("Bearer {tampered}")),
        "Token is invalid or expired",
    )
    .await;
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let (app, reached) = probe_app();
    let token = test_tokens().issue_access_token(&principal()).unwrap();

    let response = app
        .oneshot(get_request("/probe", Some(&format!("bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_me_returns_principal() {
    let (app, _) = setup_test_app();
    let token = test_tokens().issue_access_token(&principal()).unwrap();

    let response = app
        .oneshot(get_request("/api/me", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "user_id": 5, "email": "kasir@rekap.test", "branch_id": 3 })
    );
}

#[tokio::test]
async fn test_reporting_routes_are_gated() {
    for uri in [
        "/api/me",
        "/api/transactions",
        "/api/transactions/trx/TRX-001",
        "/api/transactions/branch/1",
        "/api/summary/daily",
        "/api/summary/range?start_date=2024-05-01&end_date=2024-05-02",
        "/api/branches",
    ] {
        let (app, _) = setup_test_app();
        let response = app.oneshot(get_request(uri, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_ping_is_public() {
    let (app, _) = setup_test_app();

    let response = app.oneshot(get_request("/ping", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "pong", "status": "Server is running!" })
    );
}

#[tokio::test]
async fn test_summary_range_validation_runs_after_gate() {
    let (app, _) = setup_test_app();
    let token = test_tokens().issue_access_token(&principal()).unwrap();

    let response = app
        .oneshot(get_request(
            "/api/summary/range?start_date=2024-05-01",
            Some(&format!("Bearer {token}")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "start_date and end_date are required" })
    );
}
