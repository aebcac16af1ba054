use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use storefront_domain::role::AdminRole;
use storefront_session::cookie::{
    SESSION_COOKIE, clear_session_cookie, refresh_session_cookie, set_session_cookie,
};

use crate::error::ApiError;
use crate::handlers::SuccessResponse;
use crate::session::AdminSession;
use crate::state::AppState;
use crate::usecase::session::{LoginInput, LoginUseCase, RefreshSessionUseCase};

// ── POST /api/admins/login ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthStatusResponse {
    pub success: bool,
    pub role: AdminRole,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = LoginUseCase {
        admins: state.admin_repo(),
        jwt_secret: state.jwt_secret.clone(),
        session_ttl_secs: state.session_ttl_secs,
    };

    let out = usecase
        .execute(LoginInput {
            login: body.login,
            password: body.password,
        })
        .await?;

    let jar = set_session_cookie(jar, out.token, state.session_ttl_secs, state.cookie_secure);

    Ok((
        jar,
        Json(AuthStatusResponse {
            success: true,
            role: out.role,
        }),
    ))
}

// ── GET /api/admins/check-auth ────────────────────────────────────────────────

pub async fn check_auth(session: AdminSession) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        success: true,
        role: session.role,
    })
}

// ── POST /api/admins/refresh-token ────────────────────────────────────────────

pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let current = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(ApiError::MissingToken)?;

    let usecase = RefreshSessionUseCase {
        jwt_secret: state.jwt_secret.clone(),
        session_ttl_secs: state.session_ttl_secs,
    };

    let out = usecase.execute(&current).await?;

    // Refresh rewrites the cookie without Max-Age; see the cookie crate docs.
    let jar = refresh_session_cookie(jar, out.token, state.cookie_secure);

    Ok((jar, Json(SuccessResponse::ok())))
}

// ── POST /api/admins/logout ───────────────────────────────────────────────────

/// Unconditional and idempotent: clears whatever cookie the client holds.
/// The token itself stays verifiable until its `exp` elapses.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.cookie_secure);
    (jar, Json(SuccessResponse::ok()))
}
