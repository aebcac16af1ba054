use sea_orm::entity::prelude::*;

/// Catalog product. Price is a double-precision column; JSON numbers map
/// onto it without a decimal type, and no arithmetic is done on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_ref: String,
    pub category_ref: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
