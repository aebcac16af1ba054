use anyhow::anyhow;
use uuid::Uuid;

use storefront_domain::role::AdminRole;
use storefront_session::token::{SessionTokenError, issue_session_token, validate_session_token};

use crate::domain::repository::AdminRepository;
use crate::error::ApiError;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub login: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SessionOutput {
    pub token: String,
    pub token_exp: u64,
    pub role: AdminRole,
}

pub struct LoginUseCase<A: AdminRepository> {
    pub admins: A,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
}

impl<A: AdminRepository> LoginUseCase<A> {
    pub async fn execute(&self, input: LoginInput) -> Result<SessionOutput, ApiError> {
        // One undifferentiated failure for unknown login and wrong password.
        let admin = self
            .admins
            .find_by_credentials(&input.login, &input.password)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let (token, token_exp) = issue_session_token(
            admin.id,
            admin.role.as_wire(),
            &self.jwt_secret,
            self.session_ttl_secs,
        )
        .map_err(|e| ApiError::Internal(anyhow!("sign session token: {e}")))?;

        Ok(SessionOutput {
            token,
            token_exp,
            role: admin.role,
        })
    }
}

// ── RefreshSession ───────────────────────────────────────────────────────────

pub struct RefreshSessionUseCase {
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
}

impl RefreshSessionUseCase {
    /// Re-verify the current token, then reissue the same `{sub, role}` with
    /// a fresh expiry. Fails exactly like the gate on an invalid or expired
    /// input token — there is no grace window.
    pub async fn execute(&self, current_token: &str) -> Result<SessionOutput, ApiError> {
        let claims =
            validate_session_token(current_token, &self.jwt_secret).map_err(|e| match e {
                SessionTokenError::Expired => ApiError::TokenExpired,
                _ => ApiError::InvalidToken,
            })?;

        let admin_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| ApiError::InvalidToken)?;
        let role = AdminRole::from_wire(&claims.role).ok_or(ApiError::InvalidToken)?;

        let (token, token_exp) = issue_session_token(
            admin_id,
            role.as_wire(),
            &self.jwt_secret,
            self.session_ttl_secs,
        )
        .map_err(|e| ApiError::Internal(anyhow!("sign session token: {e}")))?;

        Ok(SessionOutput {
            token,
            token_exp,
            role,
        })
    }
}
