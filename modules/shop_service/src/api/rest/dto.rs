//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Product DTOs =====

/// Product response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,

    #[schema(example = "Mug")]
    pub name: String,

    pub category_id: i32,

    pub page_id: i32,

    /// Base price
    pub price: PriceDto,

    pub variations: Vec<VariationDto>,

    pub attributes: Vec<ProductAttributeDto>,

    pub location_inventories: Vec<LocationInventoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceDto {
    pub id: i32,

    /// Decimal amount, serialized as a string
    #[schema(value_type = String, example = "9.99")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VariationDto {
    pub id: i32,

    #[schema(example = "Red")]
    pub name: String,

    pub price: PriceDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductAttributeDto {
    pub id: i32,

    #[schema(example = "Gift wrap")]
    pub name: String,

    pub price: PriceDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationInventoryDto {
    pub id: i32,

    pub location_id: i32,

    pub count: i32,

    pub location: LocationDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,

    pub name: String,
}

/// Create product request. The category comes from the request path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Mug")]
    pub name: String,

    pub page_id: i32,

    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,

    #[serde(default)]
    pub variations: Vec<CreateVariationRequest>,

    #[serde(default)]
    pub attributes: Vec<CreateAttributeRequest>,

    #[serde(default)]
    pub location_inventories: Vec<CreateLocationInventoryRequest>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateVariationRequest {
    /// Missing names are read as empty and rejected by the service
    #[serde(default)]
    pub name: String,

    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAttributeRequest {
    #[serde(default)]
    pub name: String,

    #[schema(value_type = String, example = "1.50")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLocationInventoryRequest {
    pub count: i32,
}

/// Edit product request. Category and product ids come from the request path.
///
/// Child entries without `id` are added; stored children not listed are removed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EditProductRequest {
    pub name: String,

    pub page_id: i32,

    #[schema(value_type = String, example = "12.00")]
    pub price: Decimal,

    #[serde(default)]
    pub variations: Vec<EditVariationRequest>,

    #[serde(default)]
    pub attributes: Vec<EditAttributeRequest>,

    #[serde(default)]
    pub location_inventories: Vec<EditLocationInventoryRequest>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EditVariationRequest {
    #[serde(default)]
    pub id: Option<i32>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price_id: Option<i32>,

    #[schema(value_type = String)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EditAttributeRequest {
    #[serde(default)]
    pub id: Option<i32>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price_id: Option<i32>,

    #[schema(value_type = String)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EditLocationInventoryRequest {
    #[serde(default)]
    pub id: Option<i32>,

    pub location_id: i32,

    pub count: i32,
}

// ===== Category / Page DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,

    #[schema(example = "Kitchen")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i32,

    #[schema(example = "Corner Café")]
    pub name: String,
}

/// Register category or page request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterNamedRequest {
    pub name: String,
}

// ===== List Response DTOs =====

/// List of products in a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductsListResponse {
    pub items: Vec<ProductDto>,

    /// Total count
    pub total: usize,
}
