use sea_orm::entity::prelude::*;

/// Product table entity (aggregate root)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub category_id: i32,

    pub page_id: i32,

    /// Base price row owned by this product
    pub price_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,

    #[sea_orm(
        belongs_to = "super::page::Entity",
        from = "Column::PageId",
        to = "super::page::Column::Id"
    )]
    Page,

    #[sea_orm(
        belongs_to = "super::price::Entity",
        from = "Column::PriceId",
        to = "super::price::Column::Id"
    )]
    Price,

    #[sea_orm(has_many = "super::variation::Entity")]
    Variations,

    #[sea_orm(has_many = "super::product_attribute::Entity")]
    Attributes,

    #[sea_orm(has_many = "super::product_location_inventory::Entity")]
    LocationInventories,
}

impl Related<super::variation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variations.def()
    }
}

impl Related<super::product_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attributes.def()
    }
}

impl Related<super::product_location_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationInventories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
