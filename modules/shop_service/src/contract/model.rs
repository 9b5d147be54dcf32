//! Contract models for shop service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use rust_decimal::Decimal;

/// Monetary amount owned by exactly one product, variation or attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub id: i32,
    pub amount: Decimal,
}

/// Product category (groups products)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Page that owns the products shown on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: i32,
    pub name: String,
}

/// Stock location referenced by inventory lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

/// Product aggregate root with its owned children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub page_id: i32,
    /// Base price
    pub price: Price,
    pub variations: Vec<Variation>,
    pub attributes: Vec<ProductAttribute>,
    pub location_inventories: Vec<ProductLocationInventory>,
}

/// Sellable variation of a product (e.g. colour)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    pub id: i32,
    pub product_id: i32,
    /// Never empty once persisted
    pub name: String,
    pub price: Price,
}

/// Priced add-on attribute of a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttribute {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: Price,
}

/// Stock count of a product at one location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLocationInventory {
    pub id: i32,
    pub product_id: i32,
    pub location_id: i32,
    pub count: i32,
    pub location: Location,
}

// ===== Input models =====

/// Input for creating a product; no identifiers are accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCreate {
    pub name: String,
    pub category_id: i32,
    pub page_id: i32,
    pub price: Decimal,
    pub variations: Vec<VariationCreate>,
    pub attributes: Vec<ProductAttributeCreate>,
    pub location_inventories: Vec<LocationInventoryCreate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationCreate {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributeCreate {
    pub name: String,
    pub price: Decimal,
}

/// Inventory line for a new product. The location is synthesized by the
/// service and named after the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInventoryCreate {
    pub count: i32,
}

/// Input for editing a product.
///
/// Child entries with `id: None` are new rows; entries with an id must belong
/// to the product being edited. Children missing from the lists are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEdit {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub page_id: i32,
    pub price: Decimal,
    pub variations: Vec<VariationEdit>,
    pub attributes: Vec<ProductAttributeEdit>,
    pub location_inventories: Vec<LocationInventoryEdit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationEdit {
    pub id: Option<i32>,
    pub name: String,
    pub price_id: Option<i32>,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributeEdit {
    pub id: Option<i32>,
    pub name: String,
    pub price_id: Option<i32>,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInventoryEdit {
    pub id: Option<i32>,
    pub location_id: i32,
    pub count: i32,
}
