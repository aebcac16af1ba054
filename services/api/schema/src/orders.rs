use sea_orm::entity::prelude::*;

use crate::items::LineItems;

/// Customer order. `order_number` carries a UNIQUE constraint: the sequencer
/// relies on insert conflicts to serialize number assignment, so the
/// constraint is load-bearing, not decorative.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_number: i64,
    pub user_id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: LineItems,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
