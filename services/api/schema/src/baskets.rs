use sea_orm::entity::prelude::*;

use crate::items::LineItems;

/// Per-user basket: one row per user, items as a JSON document. Clearing the
/// basket empties the column but keeps the row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "baskets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: LineItems,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
