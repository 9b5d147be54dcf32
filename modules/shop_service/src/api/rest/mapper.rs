//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Product conversions =====

impl From<contract::Product> for ProductDto {
    fn from(product: contract::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category_id: product.category_id,
            page_id: product.page_id,
            price: product.price.into(),
            variations: product.variations.into_iter().map(Into::into).collect(),
            attributes: product.attributes.into_iter().map(Into::into).collect(),
            location_inventories: product
                .location_inventories
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<contract::Price> for PriceDto {
    fn from(price: contract::Price) -> Self {
        Self {
            id: price.id,
            amount: price.amount,
        }
    }
}

impl From<contract::Variation> for VariationDto {
    fn from(variation: contract::Variation) -> Self {
        Self {
            id: variation.id,
            name: variation.name,
            price: variation.price.into(),
        }
    }
}

impl From<contract::ProductAttribute> for ProductAttributeDto {
    fn from(attribute: contract::ProductAttribute) -> Self {
        Self {
            id: attribute.id,
            name: attribute.name,
            price: attribute.price.into(),
        }
    }
}

impl From<contract::ProductLocationInventory> for LocationInventoryDto {
    fn from(inventory: contract::ProductLocationInventory) -> Self {
        Self {
            id: inventory.id,
            location_id: inventory.location_id,
            count: inventory.count,
            location: LocationDto {
                id: inventory.location.id,
                name: inventory.location.name,
            },
        }
    }
}

// ===== Request conversions =====

impl CreateProductRequest {
    pub fn into_contract(self, category_id: i32) -> contract::ProductCreate {
        contract::ProductCreate {
            name: self.name,
            category_id,
            page_id: self.page_id,
            price: self.price,
            variations: self
                .variations
                .into_iter()
                .map(|v| contract::VariationCreate {
                    name: v.name,
                    price: v.price,
                })
                .collect(),
            attributes: self
                .attributes
                .into_iter()
                .map(|a| contract::ProductAttributeCreate {
                    name: a.name,
                    price: a.price,
                })
                .collect(),
            location_inventories: self
                .location_inventories
                .into_iter()
                .map(|i| contract::LocationInventoryCreate { count: i.count })
                .collect(),
        }
    }
}

impl EditProductRequest {
    pub fn into_contract(self, category_id: i32, product_id: i32) -> contract::ProductEdit {
        contract::ProductEdit {
            id: product_id,
            name: self.name,
            category_id,
            page_id: self.page_id,
            price: self.price,
            variations: self
                .variations
                .into_iter()
                .map(|v| contract::VariationEdit {
                    id: v.id,
                    name: v.name,
                    price_id: v.price_id,
                    price: v.price,
                })
                .collect(),
            attributes: self
                .attributes
                .into_iter()
                .map(|a| contract::ProductAttributeEdit {
                    id: a.id,
                    name: a.name,
                    price_id: a.price_id,
                    price: a.price,
                })
                .collect(),
            location_inventories: self
                .location_inventories
                .into_iter()
                .map(|i| contract::LocationInventoryEdit {
                    id: i.id,
                    location_id: i.location_id,
                    count: i.count,
                })
                .collect(),
        }
    }
}

// ===== Category / Page conversions =====

impl From<contract::Category> for CategoryDto {
    fn from(category: contract::Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<contract::Page> for PageDto {
    fn from(page: contract::Page) -> Self {
        Self {
            id: page.id,
            name: page.name,
        }
    }
}
