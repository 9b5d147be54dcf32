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
                    .table(ShopProducts::Table)
                    .if_not_exists()
                    .col(id_column(ShopProducts::Id))
                    .col(ColumnDef::new(ShopProducts::Name).string().not_null())
                    .col(ColumnDef::new(ShopProducts::CategoryId).integer().not_null())
                    .col(ColumnDef::new(ShopProducts::PageId).integer().not_null())
                    .col(ColumnDef::new(ShopProducts::PriceId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_products_category")
                            .from(ShopProducts::Table, ShopProducts::CategoryId)
                            .to(ShopCategories::Table, ShopCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_products_page")
                            .from(ShopProducts::Table, ShopProducts::PageId)
                            .to(Pages::Table, Pages::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_products_price")
                            .from(ShopProducts::Table, ShopProducts::PriceId)
                            .to(ShopPrices::Table, ShopPrices::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shop_products_category_id")
                    .table(ShopProducts::Table)
                    .col(ShopProducts::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopVariations::Table)
                    .if_not_exists()
                    .col(id_column(ShopVariations::Id))
                    .col(ColumnDef::new(ShopVariations::ProductId).integer().not_null())
                    .col(ColumnDef::new(ShopVariations::Name).string().not_null())
                    .col(ColumnDef::new(ShopVariations::PriceId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_variations_product")
                            .from(ShopVariations::Table, ShopVariations::ProductId)
                            .to(ShopProducts::Table, ShopProducts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_variations_price")
                            .from(ShopVariations::Table, ShopVariations::PriceId)
                            .to(ShopPrices::Table, ShopPrices::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopProductAttributes::Table)
                    .if_not_exists()
                    .col(id_column(ShopProductAttributes::Id))
                    .col(
                        ColumnDef::new(ShopProductAttributes::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ShopProductAttributes::Name).string().not_null())
                    .col(
                        ColumnDef::new(ShopProductAttributes::PriceId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_product_attributes_product")
                            .from(ShopProductAttributes::Table, ShopProductAttributes::ProductId)
                            .to(ShopProducts::Table, ShopProducts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_product_attributes_price")
                            .from(ShopProductAttributes::Table, ShopProductAttributes::PriceId)
                            .to(ShopPrices::Table, ShopPrices::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopProductLocationInventories::Table)
                    .if_not_exists()
                    .col(id_column(ShopProductLocationInventories::Id))
                    .col(
                        ColumnDef::new(ShopProductLocationInventories::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShopProductLocationInventories::LocationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShopProductLocationInventories::Count)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_inventories_product")
                            .from(
                                ShopProductLocationInventories::Table,
                                ShopProductLocationInventories::ProductId,
                            )
                            .to(ShopProducts::Table, ShopProducts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_inventories_location")
                            .from(
                                ShopProductLocationInventories::Table,
                                ShopProductLocationInventories::LocationId,
                            )
                            .to(ShopLocations::Table, ShopLocations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ShopProductLocationInventories::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ShopProductAttributes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShopVariations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShopProducts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShopProducts {
    Table,
    Id,
    Name,
    CategoryId,
    PageId,
    PriceId,
}

#[derive(DeriveIden)]
enum ShopVariations {
    Table,
    Id,
    ProductId,
    Name,
    PriceId,
}

#[derive(DeriveIden)]
enum ShopProductAttributes {
    Table,
    Id,
    ProductId,
    Name,
    PriceId,
}

#[derive(DeriveIden)]
enum ShopProductLocationInventories {
    Table,
    Id,
    ProductId,
    LocationId,
    Count,
}

#[derive(DeriveIden)]
enum ShopCategories {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Pages {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ShopPrices {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ShopLocations {
    Table,
    Id,
}
