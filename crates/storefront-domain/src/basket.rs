//! Basket and line-item types.
//!
//! A basket holds an ordered list of line items keyed by product name. The
//! item operations here are pure; persistence is a read-modify-write cycle
//! owned by the service layer.

use serde::{Deserialize, Serialize};

/// One product line inside a basket or an order snapshot.
///
/// Price and image are copied from the product at the time the line is
/// created and never re-read, so later product edits don't retroactively
/// change baskets or order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub image_ref: String,
}

/// A per-user basket. One basket per user id, created lazily on first add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub user_id: String,
    pub items: Vec<LineItem>,
}

impl Basket {
    /// An empty basket for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    /// Add a line item, merging on product name.
    ///
    /// If a line with the same `product_name` already exists its quantity is
    /// incremented by `item.quantity` and the stored price/image are kept.
    /// Otherwise the item is appended. Not idempotent: adding quantity 1
    /// twice yields quantity 2.
    pub fn add_item(&mut self, item: LineItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_name == item.product_name)
        {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Set (not merge) the quantity of the line with the given product name.
    ///
    /// A missing product is a silent no-op. Returns `true` if a line was
    /// updated.
    pub fn set_quantity(&mut self, product_name: &str, quantity: u32) -> bool {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_name == product_name)
        {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line with the given product name.
    ///
    /// A missing product is a silent no-op. Returns `true` if a line was
    /// removed.
    pub fn remove_item(&mut self, product_name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_name != product_name);
        self.items.len() != before
    }

    /// Empty the item list. The basket itself survives.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
