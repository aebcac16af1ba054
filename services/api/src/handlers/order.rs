use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::serde::to_rfc3339_ms;
use storefront_domain::basket::LineItem;

use crate::domain::types::Order;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, DeleteOrderUseCase, ListOrdersUseCase, UpdateOrderInput,
    UpdateOrderUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub order_number: i64,
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            order_number: o.order_number,
            user_id: o.user_id,
            items: o.items,
            name: o.name,
            email: o.email,
            phone: o.phone,
            status: o.status,
            created_at: o.created_at,
        }
    }
}

// ── POST /api/orders ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateOrderUseCase {
        orders: state.order_repo(),
    };
    let order = usecase
        .execute(CreateOrderInput {
            user_id: body.user_id,
            items: body.items,
            name: body.name,
            email: body.email,
            phone: body.phone,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

// ── GET /api/orders ───────────────────────────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let usecase = ListOrdersUseCase {
        orders: state.order_repo(),
    };
    let orders = usecase.execute().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

// ── PUT /api/orders/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub items: Option<Vec<LineItem>>,
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let usecase = UpdateOrderUseCase {
        orders: state.order_repo(),
    };
    let order = usecase
        .execute(
            id,
            UpdateOrderInput {
                status: body.status,
                items: body.items,
            },
        )
        .await?;
    Ok(Json(order.into()))
}

// ── DELETE /api/orders/{id} ───────────────────────────────────────────────────

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteOrderUseCase {
        orders: state.order_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
