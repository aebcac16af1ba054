use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use storefront_domain::basket::Basket;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::basket::{
    AddItemInput, AddItemUseCase, ClearBasketUseCase, GetBasketUseCase, RemoveItemUseCase,
    UpdateQuantityUseCase,
};

// Basket and LineItem already serialize camelCase; responses use them directly.

// ── POST /api/baskets/add ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub user_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub image_ref: String,
}

pub async fn add_item(
    State(state): State<AppState>,
    Json(body): Json<AddItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = AddItemUseCase {
        baskets: state.basket_repo(),
    };
    let basket = usecase
        .execute(AddItemInput {
            user_id: body.user_id,
            product_name: body.product_name,
            quantity: body.quantity,
            unit_price: body.unit_price,
            image_ref: body.image_ref,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(basket)))
}

// ── PUT /api/baskets/update ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    pub user_id: String,
    pub product_name: String,
    pub quantity: u32,
}

pub async fn update_quantity(
    State(state): State<AppState>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<Json<Basket>, ApiError> {
    let usecase = UpdateQuantityUseCase {
        baskets: state.basket_repo(),
    };
    let basket = usecase
        .execute(&body.user_id, &body.product_name, body.quantity)
        .await?;
    Ok(Json(basket))
}

// ── DELETE /api/baskets/remove ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemRequest {
    pub user_id: String,
    pub product_name: String,
}

pub async fn remove_item(
    State(state): State<AppState>,
    Json(body): Json<RemoveItemRequest>,
) -> Result<Json<Basket>, ApiError> {
    let usecase = RemoveItemUseCase {
        baskets: state.basket_repo(),
    };
    let basket = usecase.execute(&body.user_id, &body.product_name).await?;
    Ok(Json(basket))
}

// ── GET /api/baskets/{user_id} ────────────────────────────────────────────────

/// A missing basket is `null`, never 404 — storefront clients poll this
/// before the first add.
pub async fn get_basket(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<Basket>>, ApiError> {
    let usecase = GetBasketUseCase {
        baskets: state.basket_repo(),
    };
    Ok(Json(usecase.execute(&user_id).await?))
}

// ── DELETE /api/baskets/{user_id} ─────────────────────────────────────────────

pub async fn clear_basket(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let usecase = ClearBasketUseCase {
        baskets: state.basket_repo(),
    };
    usecase.execute(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
