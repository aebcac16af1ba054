use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no session token")]
    MissingToken,
    #[error("session token expired")]
    TokenExpired,
    #[error("invalid session token")]
    InvalidToken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("category not found")]
    CategoryNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("basket not found")]
    BasketNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("price must not be negative")]
    InvalidPrice,
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("category already exists")]
    CategoryExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::BasketNotFound => "BASKET_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::CategoryExists => "CATEGORY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingToken
            | Self::TokenExpired
            | Self::InvalidToken
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::CategoryNotFound
            | Self::ProductNotFound
            | Self::BasketNotFound
            | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::MissingField(_) | Self::InvalidPrice | Self::InvalidQuantity => {
                StatusCode::BAD_REQUEST
            }
            Self::CategoryExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        let body = if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            // Existing clients read the underlying detail off 500 payloads.
            serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "error": format!("{e:#}"),
            })
        } else {
            serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
            })
        };
        (status, axum::Json(body)).into_response()
    }
}
