use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check. Returns OK once the process
/// is serving; a store outage surfaces as 500s on real routes instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
