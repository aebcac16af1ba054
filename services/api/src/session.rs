//! Session gate: cookie-token extractor for protected routes.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::cookie::CookieJar;
use http::request::Parts;
use uuid::Uuid;

use storefront_domain::role::AdminRole;
use storefront_session::cookie::SESSION_COOKIE;
use storefront_session::token::{SessionTokenError, validate_session_token};

use crate::error::ApiError;
use crate::state::AppState;

/// Administrator identity extracted from a validated session cookie.
///
/// Rejects with 401 before the route handler runs: `MISSING_TOKEN` when the
/// cookie is absent, `TOKEN_EXPIRED` when the JWT's expiry has elapsed,
/// `INVALID_TOKEN` for any other verification failure. Role enforcement
/// (403) is a separate, later check against the route's required role.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: Uuid,
    pub role: AdminRole,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let state = AppState::from_ref(state);
        let token = CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned());

        async move {
            let token = token.ok_or(ApiError::MissingToken)?;
            let claims =
                validate_session_token(&token, &state.jwt_secret).map_err(|e| match e {
                    SessionTokenError::Expired => ApiError::TokenExpired,
                    _ => ApiError::InvalidToken,
                })?;
            let admin_id = claims
                .sub
                .parse::<Uuid>()
                .map_err(|_| ApiError::InvalidToken)?;
            let role = AdminRole::from_wire(&claims.role).ok_or(ApiError::InvalidToken)?;
            Ok(Self { admin_id, role })
        }
    }
}
