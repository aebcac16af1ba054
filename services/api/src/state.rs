use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAdminRepository, DbBasketRepository, DbCategoryRepository, DbOrderRepository,
    DbProductRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn admin_repo(&self) -> DbAdminRepository {
        DbAdminRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn basket_repo(&self) -> DbBasketRepository {
        DbBasketRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }
}
