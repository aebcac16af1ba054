use storefront_domain::basket::{Basket, LineItem};

use crate::domain::repository::BasketRepository;
use crate::error::ApiError;

// Basket writes are read-modify-write over a single row. Two concurrent
// writes for the same user can interleave and the last save wins; accepted
// for baskets, unlike order numbering.

// ── AddItem ──────────────────────────────────────────────────────────────────

pub struct AddItemInput {
    pub user_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub image_ref: String,
}

pub struct AddItemUseCase<B: BasketRepository> {
    pub baskets: B,
}

impl<B: BasketRepository> AddItemUseCase<B> {
    pub async fn execute(&self, input: AddItemInput) -> Result<Basket, ApiError> {
        if input.user_id.trim().is_empty() {
            return Err(ApiError::MissingField("userId"));
        }
        if input.product_name.trim().is_empty() {
            return Err(ApiError::MissingField("productName"));
        }
        if input.quantity < 1 {
            return Err(ApiError::InvalidQuantity);
        }
        if input.unit_price < 0.0 {
            return Err(ApiError::InvalidPrice);
        }

        // Basket is created lazily on first add.
        let mut basket = self
            .baskets
            .find_by_user(&input.user_id)
            .await?
            .unwrap_or_else(|| Basket::new(input.user_id.clone()));

        basket.add_item(LineItem {
            product_name: input.product_name,
            quantity: input.quantity,
            unit_price: input.unit_price,
            image_ref: input.image_ref,
        });

        self.baskets.save(&basket).await?;
        Ok(basket)
    }
}

// ── RemoveItem ───────────────────────────────────────────────────────────────

pub struct RemoveItemUseCase<B: BasketRepository> {
    pub baskets: B,
}

impl<B: BasketRepository> RemoveItemUseCase<B> {
    /// Missing basket is an error; a missing product within an existing
    /// basket is a silent no-op returning the unchanged basket.
    pub async fn execute(&self, user_id: &str, product_name: &str) -> Result<Basket, ApiError> {
        let mut basket = self
            .baskets
            .find_by_user(user_id)
            .await?
            .ok_or(ApiError::BasketNotFound)?;

        basket.remove_item(product_name);
        self.baskets.save(&basket).await?;
        Ok(basket)
    }
}

// ── UpdateQuantity ───────────────────────────────────────────────────────────

pub struct UpdateQuantityUseCase<B: BasketRepository> {
    pub baskets: B,
}

impl<B: BasketRepository> UpdateQuantityUseCase<B> {
    /// Sets (not merges) the quantity. Same absence semantics as remove:
    /// missing basket errors, missing product no-ops.
    pub async fn execute(
        &self,
        user_id: &str,
        product_name: &str,
        quantity: u32,
    ) -> Result<Basket, ApiError> {
        if quantity < 1 {
            return Err(ApiError::InvalidQuantity);
        }

        let mut basket = self
            .baskets
            .find_by_user(user_id)
            .await?
            .ok_or(ApiError::BasketNotFound)?;

        basket.set_quantity(product_name, quantity);
        self.baskets.save(&basket).await?;
        Ok(basket)
    }
}

// ── GetBasket ────────────────────────────────────────────────────────────────

pub struct GetBasketUseCase<B: BasketRepository> {
    pub baskets: B,
}

impl<B: BasketRepository> GetBasketUseCase<B> {
    /// Absence is `None`, not an error — callers treat it as an empty basket.
    pub async fn execute(&self, user_id: &str) -> Result<Option<Basket>, ApiError> {
        self.baskets.find_by_user(user_id).await
    }
}

// ── ClearBasket ──────────────────────────────────────────────────────────────

pub struct ClearBasketUseCase<B: BasketRepository> {
    pub baskets: B,
}

impl<B: BasketRepository> ClearBasketUseCase<B> {
    /// Empties the item list; the basket row itself survives.
    pub async fn execute(&self, user_id: &str) -> Result<(), ApiError> {
        let mut basket = self
            .baskets
            .find_by_user(user_id)
            .await?
            .ok_or(ApiError::BasketNotFound)?;

        basket.clear();
        self.baskets.save(&basket).await?;
        Ok(())
    }
}
