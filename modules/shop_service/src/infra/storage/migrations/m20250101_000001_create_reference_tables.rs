use super::id_column;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(id_column(Pages::Id))
                    .col(ColumnDef::new(Pages::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopCategories::Table)
                    .if_not_exists()
                    .col(id_column(ShopCategories::Id))
                    .col(ColumnDef::new(ShopCategories::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopPrices::Table)
                    .if_not_exists()
                    .col(id_column(ShopPrices::Id))
                    .col(
                        ColumnDef::new(ShopPrices::Amount)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopLocations::Table)
                    .if_not_exists()
                    .col(id_column(ShopLocations::Id))
                    .col(ColumnDef::new(ShopLocations::Name).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopLocations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShopPrices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShopCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pages {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ShopCategories {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ShopPrices {
    Table,
    Id,
    Amount,
}

#[derive(DeriveIden)]
enum ShopLocations {
    Table,
    Id,
    Name,
}
