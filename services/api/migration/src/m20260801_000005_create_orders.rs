use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // UNIQUE serializes order-number assignment: concurrent
                    // inserts of the same number conflict and one side retries.
                    .col(
                        ColumnDef::new(Orders::OrderNumber)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Orders::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Orders::Items)
                            .json_binary()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Orders::Name).string().not_null())
                    .col(ColumnDef::new(Orders::Email).string().not_null())
                    .col(ColumnDef::new(Orders::Phone).string().not_null())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    OrderNumber,
    UserId,
    Items,
    Name,
    Email,
    Phone,
    Status,
    CreatedAt,
}
