use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use storefront_domain::basket::LineItem;

/// Line-item list stored as a JSONB column on baskets and orders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LineItems(pub Vec<LineItem>);
