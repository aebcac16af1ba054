use anyhow::anyhow;
use chrono::Utc;
use uuid::Uuid;

use storefront_domain::basket::LineItem;

use crate::domain::repository::OrderRepository;
use crate::domain::types::{DEFAULT_ORDER_STATUS, Order};
use crate::error::ApiError;

/// Upper bound on number-assignment retries. Every conflict round means some
/// other writer won a number, so contention of N writers settles within N
/// rounds; exhaustion inserts nothing, keeping the sequence dense.
pub const MAX_SEQUENCE_ATTEMPTS: usize = 10;

fn validate_items(items: &[LineItem]) -> Result<(), ApiError> {
    for item in items {
        if item.product_name.trim().is_empty() {
            return Err(ApiError::MissingField("productName"));
        }
        if item.quantity < 1 {
            return Err(ApiError::InvalidQuantity);
        }
        if item.unit_price < 0.0 {
            return Err(ApiError::InvalidPrice);
        }
    }
    Ok(())
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub orders: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    /// Assign the next order number and persist the order.
    ///
    /// Read-max-then-insert alone would race: two concurrent creations can
    /// compute the same next number. The UNIQUE(order_number) constraint
    /// turns the loser's insert into a conflict, which we answer by
    /// re-reading the maximum and retrying. Numbers start at 1, are dense,
    /// and are never reused or reassigned.
    pub async fn execute(&self, input: CreateOrderInput) -> Result<Order, ApiError> {
        if input.user_id.trim().is_empty() {
            return Err(ApiError::MissingField("userId"));
        }
        if input.name.trim().is_empty() {
            return Err(ApiError::MissingField("name"));
        }
        if input.email.trim().is_empty() {
            return Err(ApiError::MissingField("email"));
        }
        if input.phone.trim().is_empty() {
            return Err(ApiError::MissingField("phone"));
        }
        validate_items(&input.items)?;

        for _ in 0..MAX_SEQUENCE_ATTEMPTS {
            let next_number = self.orders.max_order_number().await?.unwrap_or(0) + 1;
            let order = Order {
                id: Uuid::new_v4(),
                order_number: next_number,
                user_id: input.user_id.clone(),
                items: input.items.clone(),
                name: input.name.clone(),
                email: input.email.clone(),
                phone: input.phone.clone(),
                status: DEFAULT_ORDER_STATUS.to_owned(),
                created_at: Utc::now(),
            };
            if self.orders.insert(&order).await? {
                return Ok(order);
            }
            // Lost the race for this number; another writer took it.
        }

        Err(ApiError::Internal(anyhow!(
            "order number contention not resolved after {MAX_SEQUENCE_ATTEMPTS} attempts"
        )))
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub orders: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Order>, ApiError> {
        self.orders.list_desc().await
    }
}

// ── UpdateOrder ──────────────────────────────────────────────────────────────

pub struct UpdateOrderInput {
    pub status: Option<String>,
    pub items: Option<Vec<LineItem>>,
}

pub struct UpdateOrderUseCase<R: OrderRepository> {
    pub orders: R,
}

impl<R: OrderRepository> UpdateOrderUseCase<R> {
    /// Partial update: only supplied fields change. Everything but status
    /// and items is immutable after creation.
    pub async fn execute(&self, id: Uuid, input: UpdateOrderInput) -> Result<Order, ApiError> {
        if let Some(items) = &input.items {
            validate_items(items)?;
        }
        self.orders
            .update(id, input.status.as_deref(), input.items.as_deref())
            .await?
            .ok_or(ApiError::OrderNotFound)
    }
}

// ── DeleteOrder ──────────────────────────────────────────────────────────────

pub struct DeleteOrderUseCase<R: OrderRepository> {
    pub orders: R,
}

impl<R: OrderRepository> DeleteOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        let deleted = self.orders.delete(id).await?;
        if !deleted {
            return Err(ApiError::OrderNotFound);
        }
        Ok(())
    }
}
