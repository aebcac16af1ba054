use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use storefront_domain::basket::{Basket, LineItem};

use storefront_api::domain::repository::{
    BasketRepository, CategoryRepository, OrderRepository, ProductRepository,
};
use storefront_api::domain::types::{Category, Order, Product, ProductPatch};
use storefront_api::error::ApiError;
use storefront_api::router::build_router;
use storefront_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

/// Router-backed test server. The database connection is disconnected; only
/// routes that never touch the store are exercised this way.
pub fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        session_ttl_secs: 3600,
        cookie_secure: false,
    };
    TestServer::new(build_router(state, &[], None)).expect("test server")
}

/// Forge a token with an arbitrary `exp`, signed with the test secret. Used
/// to manufacture expired-but-verifiable tokens.
pub fn forged_token(sub: Uuid, role: &str, exp: u64) -> String {
    let claims = storefront_session::token::SessionClaims {
        sub: sub.to_string(),
        role: role.to_owned(),
        exp,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encode forged token")
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

/// In-memory order store with the same uniqueness signal as the real one:
/// inserting an already-taken order number reports `false`.
#[derive(Clone, Default)]
pub struct MockOrderRepo {
    pub orders: Arc<Mutex<Vec<Order>>>,
}

impl OrderRepository for MockOrderRepo {
    async fn max_order_number(&self) -> Result<Option<i64>, ApiError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .map(|o| o.order_number)
            .max())
    }

    async fn insert(&self, order: &Order) -> Result<bool, ApiError> {
        let mut orders = self.orders.lock().unwrap();
        if orders.iter().any(|o| o.order_number == order.order_number) {
            return Ok(false);
        }
        orders.push(order.clone());
        Ok(true)
    }

    async fn list_desc(&self) -> Result<Vec<Order>, ApiError> {
        let mut orders = self.orders.lock().unwrap().clone();
        orders.sort_by(|a, b| b.order_number.cmp(&a.order_number));
        Ok(orders)
    }

    async fn update(
        &self,
        id: Uuid,
        status: Option<&str>,
        items: Option<&[LineItem]>,
    ) -> Result<Option<Order>, ApiError> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        if let Some(status) = status {
            order.status = status.to_owned();
        }
        if let Some(items) = items {
            order.items = items.to_vec();
        }
        Ok(Some(order.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() != before)
    }
}

// ── MockBasketRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockBasketRepo {
    pub baskets: Arc<Mutex<HashMap<String, Basket>>>,
}

impl BasketRepository for MockBasketRepo {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Basket>, ApiError> {
        Ok(self.baskets.lock().unwrap().get(user_id).cloned())
    }

    async fn save(&self, basket: &Basket) -> Result<(), ApiError> {
        self.baskets
            .lock()
            .unwrap()
            .insert(basket.user_id.clone(), basket.clone());
        Ok(())
    }
}

// ── MockCategoryRepo ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCategoryRepo {
    pub categories: Arc<Mutex<Vec<Category>>>,
}

impl CategoryRepository for MockCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn insert(&self, category: &Category) -> Result<bool, ApiError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == category.name) {
            return Ok(false);
        }
        categories.push(category.clone());
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() != before)
    }
}

// ── MockProductRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProductRepo {
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for MockProductRepo {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let needle = query.to_lowercase();
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_by_category(&self, category_ref: &str) -> Result<Vec<Product>, ApiError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category_ref == category_ref)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ApiError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, product: &Product) -> Result<(), ApiError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<Option<Product>, ApiError> {
        let mut products = self.products.lock().unwrap();
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            product.name = name.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(image_ref) = &patch.image_ref {
            product.image_ref = image_ref.clone();
        }
        if let Some(category_ref) = &patch.category_ref {
            product.category_ref = category_ref.clone();
        }
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn line_item(product_name: &str, quantity: u32) -> LineItem {
    LineItem {
        product_name: product_name.to_owned(),
        quantity,
        unit_price: 29.99,
        image_ref: "/img/lamp.png".to_owned(),
    }
}
