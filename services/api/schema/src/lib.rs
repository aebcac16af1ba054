//! sea-orm entities for the storefront API service.
//!
//! Basket and order line items live in a JSON column ([`items::LineItems`])
//! so each basket/order stays a single row and saves keep the store's
//! single-document atomicity.

pub mod admins;
pub mod baskets;
pub mod categories;
pub mod items;
pub mod orders;
pub mod products;
