pub mod admin;
pub mod basket;
pub mod category;
pub mod order;
pub mod panel;
pub mod product;

use serde::Serialize;

/// `{success: true}` body shared by the auth endpoints.
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
