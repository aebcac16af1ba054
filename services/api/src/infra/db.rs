use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, SqlErr,
    sea_query::{Expr, OnConflict, extension::postgres::PgExpr},
};
use uuid::Uuid;

use storefront_domain::basket::{Basket, LineItem};
use storefront_domain::role::AdminRole;
use storefront_schema::{admins, baskets, categories, items::LineItems, orders, products};

use crate::domain::repository::{
    AdminRepository, BasketRepository, CategoryRepository, OrderRepository, ProductRepository,
};
use crate::domain::types::{Admin, Category, Order, Product, ProductPatch};
use crate::error::ApiError;

/// Escape `\`, `%` and `_` for use inside a LIKE pattern. Postgres treats
/// backslash as the default escape character.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ── Admin repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<Admin>, ApiError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Login.eq(login))
            .filter(admins::Column::Password.eq(password))
            .one(&self.db)
            .await
            .context("find admin by credentials")?;
        model.map(admin_from_model).transpose()
    }
}

fn admin_from_model(model: admins::Model) -> Result<Admin, ApiError> {
    let role = AdminRole::from_wire(&model.role)
        .ok_or_else(|| anyhow!("admin {} has unknown role {:?}", model.id, model.role))?;
    Ok(Admin {
        id: model.id,
        login: model.login,
        password: model.password,
        role,
        created_at: model.created_at,
    })
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn insert(&self, category: &Category) -> Result<bool, ApiError> {
        let result = categories::ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            // Duplicate name hits the unique index; signal it, don't fail.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert category").into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = categories::Entity::delete_many()
            .filter(categories::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete category")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let pattern = format!("%{}%", escape_like(query));
        let models = products::Entity::find()
            .filter(Expr::col((products::Entity, products::Column::Name)).ilike(pattern))
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await
            .context("search products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn list_by_category(&self, category_ref: &str) -> Result<Vec<Product>, ApiError> {
        let models = products::Entity::find()
            .filter(products::Column::CategoryRef.eq(category_ref))
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await
            .context("list products by category")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ApiError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn insert(&self, product: &Product) -> Result<(), ApiError> {
        products::ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            image_ref: Set(product.image_ref.clone()),
            category_ref: Set(product.category_ref.clone()),
        }
        .insert(&self.db)
        .await
        .context("insert product")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<Option<Product>, ApiError> {
        let Some(existing) = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product for update")?
        else {
            return Ok(None);
        };

        let mut product = existing.into_active_model();
        if let Some(name) = &patch.name {
            product.name = Set(name.clone());
        }
        if let Some(description) = &patch.description {
            product.description = Set(description.clone());
        }
        if let Some(price) = patch.price {
            product.price = Set(price);
        }
        if let Some(image_ref) = &patch.image_ref {
            product.image_ref = Set(image_ref.clone());
        }
        if let Some(category_ref) = &patch.category_ref {
            product.category_ref = Set(category_ref.clone());
        }
        let updated = product.update(&self.db).await.context("update product")?;
        Ok(Some(product_from_model(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = products::Entity::delete_many()
            .filter(products::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        image_ref: model.image_ref,
        category_ref: model.category_ref,
    }
}

// ── Basket repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBasketRepository {
    pub db: DatabaseConnection,
}

impl BasketRepository for DbBasketRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Basket>, ApiError> {
        let model = baskets::Entity::find_by_id(user_id.to_owned())
            .one(&self.db)
            .await
            .context("find basket by user")?;
        Ok(model.map(|m| Basket {
            user_id: m.user_id,
            items: m.items.0,
        }))
    }

    async fn save(&self, basket: &Basket) -> Result<(), ApiError> {
        let row = baskets::ActiveModel {
            user_id: Set(basket.user_id.clone()),
            items: Set(LineItems(basket.items.clone())),
        };
        baskets::Entity::insert(row)
            .on_conflict(
                OnConflict::column(baskets::Column::UserId)
                    .update_column(baskets::Column::Items)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("save basket")?;
        Ok(())
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn max_order_number(&self) -> Result<Option<i64>, ApiError> {
        let model = orders::Entity::find()
            .order_by_desc(orders::Column::OrderNumber)
            .one(&self.db)
            .await
            .context("read max order number")?;
        Ok(model.map(|m| m.order_number))
    }

    async fn insert(&self, order: &Order) -> Result<bool, ApiError> {
        let result = orders::ActiveModel {
            id: Set(order.id),
            order_number: Set(order.order_number),
            user_id: Set(order.user_id.clone()),
            items: Set(LineItems(order.items.clone())),
            name: Set(order.name.clone()),
            email: Set(order.email.clone()),
            phone: Set(order.phone.clone()),
            status: Set(order.status.clone()),
            created_at: Set(order.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            // The only unique column besides the fresh v4 id is order_number,
            // so a violation here means the sequencer lost the race.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert order").into()),
        }
    }

    async fn list_desc(&self) -> Result<Vec<Order>, ApiError> {
        let models = orders::Entity::find()
            .order_by_desc(orders::Column::OrderNumber)
            .all(&self.db)
            .await
            .context("list orders")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        status: Option<&str>,
        items: Option<&[LineItem]>,
    ) -> Result<Option<Order>, ApiError> {
        let Some(existing) = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order for update")?
        else {
            return Ok(None);
        };

        let mut order = existing.into_active_model();
        if let Some(status) = status {
            order.status = Set(status.to_owned());
        }
        if let Some(items) = items {
            order.items = Set(LineItems(items.to_vec()));
        }
        let updated = order.update(&self.db).await.context("update order")?;
        Ok(Some(order_from_model(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = orders::Entity::delete_many()
            .filter(orders::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete order")?;
        Ok(result.rows_affected > 0)
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        order_number: model.order_number,
        user_id: model.user_id,
        items: model.items.0,
        name: model.name,
        email: model.email,
        phone: model.phone,
        status: model.status,
        created_at: model.created_at,
    }
}
