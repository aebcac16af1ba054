use sea_orm_migration::prelude::*;

mod m20260801_000001_create_admins;
mod m20260801_000002_create_categories;
mod m20260801_000003_create_products;
mod m20260801_000004_create_baskets;
mod m20260801_000005_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_admins::Migration),
            Box::new(m20260801_000002_create_categories::Migration),
            Box::new(m20260801_000003_create_products::Migration),
            Box::new(m20260801_000004_create_baskets::Migration),
            Box::new(m20260801_000005_create_orders::Migration),
        ]
    }
}
