use uuid::Uuid;

use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::domain::types::{Category, Product, ProductPatch};
use crate::error::ApiError;

fn require_non_empty(value: &str, field: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingField(field));
    }
    Ok(())
}

// ── Categories ───────────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> ListCategoriesUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Category>, ApiError> {
        self.categories.list().await
    }
}

pub struct CreateCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> CreateCategoryUseCase<C> {
    pub async fn execute(&self, name: String) -> Result<Category, ApiError> {
        require_non_empty(&name, "name")?;
        let category = Category {
            id: Uuid::new_v4(),
            name,
        };
        let inserted = self.categories.insert(&category).await?;
        if !inserted {
            return Err(ApiError::CategoryExists);
        }
        Ok(category)
    }
}

pub struct DeleteCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> DeleteCategoryUseCase<C> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        let deleted = self.categories.delete(id).await?;
        if !deleted {
            return Err(ApiError::CategoryNotFound);
        }
        Ok(())
    }
}

// ── Products ─────────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Product>, ApiError> {
        self.products.list().await
    }
}

pub struct SearchProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> SearchProductsUseCase<P> {
    pub async fn execute(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.products.search(query).await
    }
}

pub struct ListProductsByCategoryUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsByCategoryUseCase<P> {
    pub async fn execute(&self, category_ref: &str) -> Result<Vec<Product>, ApiError> {
        self.products.list_by_category(category_ref).await
    }
}

pub struct GetProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetProductUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<Product, ApiError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(ApiError::ProductNotFound)
    }
}

pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_ref: String,
    pub category_ref: String,
}

pub struct CreateProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> CreateProductUseCase<P> {
    pub async fn execute(&self, input: CreateProductInput) -> Result<Product, ApiError> {
        require_non_empty(&input.name, "name")?;
        require_non_empty(&input.description, "description")?;
        require_non_empty(&input.image_ref, "imageRef")?;
        require_non_empty(&input.category_ref, "categoryRef")?;
        if input.price < 0.0 {
            return Err(ApiError::InvalidPrice);
        }

        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            image_ref: input.image_ref,
            category_ref: input.category_ref,
        };
        self.products.insert(&product).await?;
        Ok(product)
    }
}

pub struct UpdateProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> UpdateProductUseCase<P> {
    pub async fn execute(&self, id: Uuid, patch: ProductPatch) -> Result<Product, ApiError> {
        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err(ApiError::InvalidPrice);
            }
        }
        self.products
            .update(id, &patch)
            .await?
            .ok_or(ApiError::ProductNotFound)
    }
}

pub struct DeleteProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> DeleteProductUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        let deleted = self.products.delete(id).await?;
        if !deleted {
            return Err(ApiError::ProductNotFound);
        }
        Ok(())
    }
}
