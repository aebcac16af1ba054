use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Category;
use crate::error::ApiError;
use crate::session::AdminSession;
use crate::state::AppState;
use crate::usecase::catalog::{CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase};

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

// ── GET /api/categories ───────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let usecase = ListCategoriesUseCase {
        categories: state.category_repo(),
    };
    let categories = usecase.execute().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

// ── POST /api/categories ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Any authenticated admin may create categories; the session gate alone
/// guards this route.
pub async fn create_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = usecase.execute(body.name).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

// ── DELETE /api/categories/{id} ───────────────────────────────────────────────

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteCategoryUseCase {
        categories: state.category_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
