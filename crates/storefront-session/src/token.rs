//! Session JWT issuing and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session claims carried by the cookie JWT.
///
/// | Field  | JWT claim | Meaning |
/// |--------|-----------|---------|
/// | `sub`  | `sub`     | administrator ID (UUID string) |
/// | `role` | custom    | administrator role wire string |
/// | `exp`  | `exp`     | expiry, seconds since UNIX epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: String,
    pub exp: u64,
}

/// Validation failure taxonomy for the session gate.
///
/// `Expired` is reported only for an elapsed `exp`; every other verification
/// failure (bad signature, malformed token, unparseable claims) collapses
/// into `Invalid`. `Missing` is produced by callers when no cookie is present
/// at all — [`validate_session_token`] itself never returns it.
#[derive(Debug, thiserror::Error)]
pub enum SessionTokenError {
    #[error("no session token")]
    Missing,
    #[error("session token expired")]
    Expired,
    #[error("invalid session token")]
    Invalid,
    #[error("failed to sign session token")]
    Signing,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a signed session token for the given administrator.
///
/// Returns the encoded token and its expiry timestamp.
pub fn issue_session_token(
    admin_id: Uuid,
    role: &str,
    secret: &str,
    ttl_secs: u64,
) -> Result<(String, u64), SessionTokenError> {
    let exp = now_secs() + ttl_secs;
    let claims = SessionClaims {
        sub: admin_id.to_string(),
        role: role.to_owned(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| SessionTokenError::Signing)?;
    Ok((token, exp))
}

/// Verify a session token's signature and expiry, returning its claims.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`. The
/// library's default 60s leeway is kept, matching the legacy verifier.
pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionClaims, SessionTokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionTokenError::Expired,
        _ => SessionTokenError::Invalid,
    })?;

    Ok(data.claims)
}
