use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Product, ProductPatch};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::catalog::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsByCategoryUseCase, ListProductsUseCase, SearchProductsUseCase,
    UpdateProductUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_ref: String,
    pub category_ref: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_ref: p.image_ref,
            category_ref: p.category_ref,
        }
    }
}

fn to_responses(products: Vec<Product>) -> Json<Vec<ProductResponse>> {
    Json(products.into_iter().map(Into::into).collect())
}

// ── GET /api/products ─────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let usecase = ListProductsUseCase {
        products: state.product_repo(),
    };
    Ok(to_responses(usecase.execute().await?))
}

// ── GET /api/products/search/{query} ──────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let usecase = SearchProductsUseCase {
        products: state.product_repo(),
    };
    Ok(to_responses(usecase.execute(&query).await?))
}

// ── GET /api/products/category/{category_ref} ─────────────────────────────────

pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category_ref): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let usecase = ListProductsByCategoryUseCase {
        products: state.product_repo(),
    };
    Ok(to_responses(usecase.execute(&category_ref).await?))
}

// ── GET /api/products/{id} ────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let usecase = GetProductUseCase {
        products: state.product_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/products ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_ref: String,
    pub category_ref: String,
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase
        .execute(CreateProductInput {
            name: body.name,
            description: body.description,
            price: body.price,
            image_ref: body.image_ref,
            category_ref: body.category_ref,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// ── PUT /api/products/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_ref: Option<String>,
    pub category_ref: Option<String>,
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let usecase = UpdateProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase
        .execute(
            id,
            ProductPatch {
                name: body.name,
                description: body.description,
                price: body.price,
                image_ref: body.image_ref,
                category_ref: body.category_ref,
            },
        )
        .await?;
    Ok(Json(product.into()))
}

// ── DELETE /api/products/{id} ─────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteProductUseCase {
        products: state.product_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
