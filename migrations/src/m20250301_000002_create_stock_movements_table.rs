use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250301_000002_create_stock_movements_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockMovements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockMovements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockMovements::ProductId).uuid().not_null())
                    .col(
                        ColumnDef::new(StockMovements::MovementType)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMovements::Quantity).big_integer().null())
                    .col(ColumnDef::new(StockMovements::Reference).text().null())
                    // Raw timestamp text as delivered by the upstream store;
                    // may be absent or malformed, parsed at classification time.
                    .col(ColumnDef::new(StockMovements::OccurredAt).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_stock_movements_product_occurred")
                    .table(StockMovements::Table)
                    .col(StockMovements::ProductId)
                    .col(StockMovements::OccurredAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockMovements::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StockMovements {
    Table,
    Id,
    ProductId,
    MovementType,
    Quantity,
    Reference,
    OccurredAt,
}
