#![allow(async_fn_in_trait)]

use uuid::Uuid;

use storefront_domain::basket::{Basket, LineItem};

use crate::domain::types::{Admin, Category, Order, Product, ProductPatch};
use crate::error::ApiError;

/// Repository for administrator credentials. Read-only: admins are seeded
/// out-of-band and never mutated by the API.
pub trait AdminRepository: Send + Sync {
    /// Exact verbatim (login, password) match. One lookup for both unknown
    /// login and wrong password, so callers can't tell the cases apart.
    async fn find_by_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<Admin>, ApiError>;
}

/// Repository for product categories.
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, ApiError>;

    /// Insert a category. Returns `false` on a duplicate name.
    async fn insert(&self, category: &Category) -> Result<bool, ApiError>;

    /// Delete a category. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for catalog products.
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Case-insensitive substring match on product name. All matches, no
    /// ranking or pagination.
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError>;

    /// Exact match on the stored category reference string.
    async fn list_by_category(&self, category_ref: &str) -> Result<Vec<Product>, ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ApiError>;

    async fn insert(&self, product: &Product) -> Result<(), ApiError>;

    /// Partial update; only `Some` fields change. Returns the updated product
    /// or `None` when the id does not resolve.
    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<Option<Product>, ApiError>;

    /// Delete a product. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for per-user baskets.
pub trait BasketRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Basket>, ApiError>;

    /// Upsert the whole basket document (single-row write; last writer wins
    /// for a given user, which is the documented basket consistency level).
    async fn save(&self, basket: &Basket) -> Result<(), ApiError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    /// Highest assigned order number, or `None` when no orders exist.
    async fn max_order_number(&self) -> Result<Option<i64>, ApiError>;

    /// Insert an order. Returns `false` when its `order_number` is already
    /// taken — the sequencer's signal to re-read and retry.
    async fn insert(&self, order: &Order) -> Result<bool, ApiError>;

    /// All orders, newest order number first.
    async fn list_desc(&self) -> Result<Vec<Order>, ApiError>;

    /// Partial update of status and/or items. Returns the updated order or
    /// `None` when the id does not resolve.
    async fn update(
        &self,
        id: Uuid,
        status: Option<&str>,
        items: Option<&[LineItem]>,
    ) -> Result<Option<Order>, ApiError>;

    /// Delete an order. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}
