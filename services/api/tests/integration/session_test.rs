use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use uuid::Uuid;

use storefront_session::cookie::SESSION_COOKIE;
use storefront_session::token::{issue_session_token, validate_session_token};

use crate::helpers::{TEST_JWT_SECRET, forged_token, test_server};

fn session_cookie(value: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, value.to_owned())
}

// ── GET /api/admins/check-auth ───────────────────────────────────────────────

#[tokio::test]
async fn should_pass_check_auth_with_valid_cookie() {
    let server = test_server();
    let (token, _) = issue_session_token(Uuid::new_v4(), "sAdmin", TEST_JWT_SECRET, 3600).unwrap();

    let response = server
        .get("/api/admins/check-auth")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "sAdmin");
}

#[tokio::test]
async fn should_reject_check_auth_without_cookie() {
    let server = test_server();

    let response = server.get("/api/admins/check-auth").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "MISSING_TOKEN");
}

#[tokio::test]
async fn should_reject_check_auth_with_expired_cookie() {
    let server = test_server();
    // exp far enough in the past to clear the verifier's 60s leeway
    let token = forged_token(Uuid::new_v4(), "sAdmin", 1_000_000);

    let response = server
        .get("/api/admins/check-auth")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn should_reject_check_auth_with_garbage_cookie() {
    let server = test_server();

    let response = server
        .get("/api/admins/check-auth")
        .add_cookie(session_cookie("not-a-jwt"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_TOKEN");
}

// ── POST /api/admins/refresh-token ───────────────────────────────────────────

#[tokio::test]
async fn should_refresh_cookie_with_same_claims_and_no_max_age() {
    let server = test_server();
    let admin_id = Uuid::new_v4();
    // Short TTL so the refreshed expiry is strictly later.
    let (token, old_exp) = issue_session_token(admin_id, "yAdmin", TEST_JWT_SECRET, 10).unwrap();

    let response = server
        .post("/api/admins/refresh-token")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let cookie = response.cookie(SESSION_COOKIE);
    // The refresh cookie is a browser-session cookie: no Max-Age.
    assert_eq!(cookie.max_age(), None);

    let claims = validate_session_token(cookie.value(), TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, admin_id.to_string());
    assert_eq!(claims.role, "yAdmin");
    assert!(claims.exp > old_exp);
}

#[tokio::test]
async fn should_reject_refresh_without_cookie() {
    let server = test_server();

    let response = server.post("/api/admins/refresh-token").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "MISSING_TOKEN");
}

#[tokio::test]
async fn should_reject_refresh_of_expired_cookie() {
    let server = test_server();
    let token = forged_token(Uuid::new_v4(), "sAdmin", 1_000_000);

    let response = server
        .post("/api/admins/refresh-token")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "TOKEN_EXPIRED");
}

// ── POST /api/admins/logout ──────────────────────────────────────────────────

#[tokio::test]
async fn should_clear_cookie_on_logout() {
    let server = test_server();
    let (token, _) = issue_session_token(Uuid::new_v4(), "sAdmin", TEST_JWT_SECRET, 3600).unwrap();

    let response = server
        .post("/api/admins/logout")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let cookie = response.cookie(SESSION_COOKIE);
    assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    assert_eq!(cookie.value(), "");
}

#[tokio::test]
async fn should_logout_without_any_cookie() {
    let server = test_server();

    let response = server.post("/api/admins/logout").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
}

// ── Admin panel pages ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_allow_panel_with_matching_role() {
    let server = test_server();
    let (token, _) = issue_session_token(Uuid::new_v4(), "sAdmin", TEST_JWT_SECRET, 3600).unwrap();

    for path in ["/admin/sAdmin", "/admin/sAdmin/admin-product"] {
        let response = server.get(path).add_cookie(session_cookie(&token)).await;
        assert_eq!(response.status_code(), StatusCode::OK, "path {path}");
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["role"], "sAdmin");
    }
}

#[tokio::test]
async fn should_forbid_panel_with_wrong_role() {
    let server = test_server();
    let (token, _) = issue_session_token(Uuid::new_v4(), "sAdmin", TEST_JWT_SECRET, 3600).unwrap();

    let response = server
        .get("/admin/yAdmin")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_reject_panel_without_session() {
    let server = test_server();

    let response = server.get("/admin/yAdmin").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "MISSING_TOKEN");
}
