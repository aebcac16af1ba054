use chrono::{DateTime, Utc};
use uuid::Uuid;

use storefront_domain::basket::LineItem;
use storefront_domain::role::AdminRole;

/// Status a freshly created order starts in.
pub const DEFAULT_ORDER_STATUS: &str = "not ready";

/// Administrator credential record. Passwords are opaque strings compared
/// verbatim against the login request — seeding and hashing policy live
/// outside the API.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub login: String,
    pub password: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

/// Product category. Only a unique name; products reference it by string.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

/// Catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_ref: String,
    pub category_ref: String,
}

/// Partial product update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_ref: Option<String>,
    pub category_ref: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_ref.is_none()
            && self.category_ref.is_none()
    }
}

/// Customer order. Immutable after creation except `status` and `items`;
/// `order_number` is assigned exactly once by the sequencer.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub order_number: i64,
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
