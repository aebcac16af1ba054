use axum::{Json, http::Uri};
use serde::Serialize;

use storefront_domain::role::AdminRole;

use crate::error::ApiError;
use crate::session::AdminSession;

/// Authorization table for the admin panel pages. Role checks are a lookup
/// here, not string comparisons scattered through handlers.
pub const PANEL_ROUTES: &[(&str, AdminRole)] = &[
    ("/admin/sAdmin", AdminRole::SAdmin),
    ("/admin/sAdmin/admin-product", AdminRole::SAdmin),
    ("/admin/yAdmin", AdminRole::YAdmin),
];

pub fn required_role(path: &str) -> Option<AdminRole> {
    PANEL_ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, role)| *role)
}

#[derive(Serialize)]
pub struct PanelResponse {
    pub success: bool,
    pub role: AdminRole,
}

// ── GET /admin/sAdmin, /admin/sAdmin/admin-product, /admin/yAdmin ─────────────

/// Shared handler for every panel page. Authentication (401) happens in the
/// `AdminSession` extractor; this adds the authorization (403) step.
pub async fn panel(session: AdminSession, uri: Uri) -> Result<Json<PanelResponse>, ApiError> {
    let required = required_role(uri.path()).ok_or(ApiError::Forbidden)?;
    if session.role != required {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(PanelResponse {
        success: true,
        role: session.role,
    }))
}
