use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250301_000001_create_products_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string_len(255).null())
                    .col(ColumnDef::new(Products::Code).string_len(100).null())
                    .col(ColumnDef::new(Products::Category).string_len(255).null())
                    .col(ColumnDef::new(Products::Stock).decimal_len(19, 4).null())
                    .col(
                        ColumnDef::new(Products::PromoPrice)
                            .decimal_len(19, 4)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Products::RegularPrice)
                            .decimal_len(19, 4)
                            .null(),
                    )
                    .col(ColumnDef::new(Products::CostUsd).decimal_len(19, 4).null())
                    .col(ColumnDef::new(Products::CostMxn).decimal_len(19, 4).null())
                    .col(ColumnDef::new(Products::ImageUrl).string_len(1024).null())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
    Name,
    Code,
    Category,
    Stock,
    PromoPrice,
    RegularPrice,
    CostUsd,
    CostMxn,
    ImageUrl,
    CreatedAt,
}
