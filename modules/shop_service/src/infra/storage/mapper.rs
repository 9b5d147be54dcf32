//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{
    category, location, page, price, product, product_attribute, product_location_inventory,
    variation,
};
use crate::contract::{
    Category, Location, Page, Price, Product, ProductAttribute, ProductLocationInventory,
    Variation,
};
use anyhow::{anyhow, Result};
use std::collections::HashMap;

// ===== Row Conversions =====

impl From<price::Model> for Price {
    fn from(entity: price::Model) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
        }
    }
}

impl From<category::Model> for Category {
    fn from(entity: category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<page::Model> for Page {
    fn from(entity: page::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<location::Model> for Location {
    fn from(entity: location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

// ===== Aggregate Assembly =====

/// Rows of one or more product aggregates, loaded in bulk
pub struct AggregateRows {
    pub products: Vec<product::Model>,
    pub variations: Vec<variation::Model>,
    pub attributes: Vec<product_attribute::Model>,
    pub inventories: Vec<product_location_inventory::Model>,
    pub prices: Vec<price::Model>,
    pub locations: Vec<location::Model>,
}

impl AggregateRows {
    /// Stitch the rows into aggregates, keeping the order of `products`.
    /// Children keep the order they were loaded in.
    pub fn into_products(self) -> Result<Vec<Product>> {
        let prices: HashMap<i32, Price> = self
            .prices
            .into_iter()
            .map(|p| (p.id, p.into()))
            .collect();
        let locations: HashMap<i32, Location> = self
            .locations
            .into_iter()
            .map(|l| (l.id, l.into()))
            .collect();

        let price_of = |price_id: i32, owner: &str| -> Result<Price> {
            prices
                .get(&price_id)
                .cloned()
                .ok_or_else(|| anyhow!("price {price_id} referenced by {owner} is missing"))
        };

        let mut variations: HashMap<i32, Vec<Variation>> = HashMap::new();
        for v in self.variations {
            let price = price_of(v.price_id, &format!("variation {}", v.id))?;
            variations.entry(v.product_id).or_default().push(Variation {
                id: v.id,
                product_id: v.product_id,
                name: v.name,
                price,
            });
        }

        let mut attributes: HashMap<i32, Vec<ProductAttribute>> = HashMap::new();
        for a in self.attributes {
            let price = price_of(a.price_id, &format!("attribute {}", a.id))?;
            attributes.entry(a.product_id).or_default().push(ProductAttribute {
                id: a.id,
                product_id: a.product_id,
                name: a.name,
                price,
            });
        }

        let mut inventories: HashMap<i32, Vec<ProductLocationInventory>> = HashMap::new();
        for inv in self.inventories {
            let location = locations.get(&inv.location_id).cloned().ok_or_else(|| {
                anyhow!(
                    "location {} referenced by inventory line {} is missing",
                    inv.location_id,
                    inv.id
                )
            })?;
            inventories
                .entry(inv.product_id)
                .or_default()
                .push(ProductLocationInventory {
                    id: inv.id,
                    product_id: inv.product_id,
                    location_id: inv.location_id,
                    count: inv.count,
                    location,
                });
        }

        self.products
            .into_iter()
            .map(|p| {
                Ok(Product {
                    price: price_of(p.price_id, &format!("product {}", p.id))?,
                    variations: variations.remove(&p.id).unwrap_or_default(),
                    attributes: attributes.remove(&p.id).unwrap_or_default(),
                    location_inventories: inventories.remove(&p.id).unwrap_or_default(),
                    id: p.id,
                    name: p.name,
                    category_id: p.category_id,
                    page_id: p.page_id,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rows() -> AggregateRows {
        AggregateRows {
            products: vec![
                product::Model {
                    id: 2,
                    name: "Mug".to_string(),
                    category_id: 3,
                    page_id: 7,
                    price_id: 10,
                },
                product::Model {
                    id: 1,
                    name: "Plate".to_string(),
                    category_id: 3,
                    page_id: 7,
                    price_id: 11,
                },
            ],
            variations: vec![variation::Model {
                id: 5,
                product_id: 2,
                name: "Red".to_string(),
                price_id: 12,
            }],
            attributes: vec![],
            inventories: vec![product_location_inventory::Model {
                id: 8,
                product_id: 2,
                location_id: 4,
                count: 10,
            }],
            prices: vec![
                price::Model {
                    id: 10,
                    amount: Decimal::new(999, 2),
                },
                price::Model {
                    id: 11,
                    amount: Decimal::new(500, 2),
                },
                price::Model {
                    id: 12,
                    amount: Decimal::new(1099, 2),
                },
            ],
            locations: vec![location::Model {
                id: 4,
                name: "Mug".to_string(),
            }],
        }
    }

    #[test]
    fn test_children_attach_to_their_product() {
        let products = rows().into_products().unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 2);
        assert_eq!(products[0].variations.len(), 1);
        assert_eq!(products[0].variations[0].price.amount, Decimal::new(1099, 2));
        assert_eq!(products[0].location_inventories[0].location.name, "Mug");
        assert!(products[1].variations.is_empty());
        assert_eq!(products[1].price.amount, Decimal::new(500, 2));
    }

    #[test]
    fn test_missing_price_is_an_error() {
        let mut rows = rows();
        rows.prices.retain(|p| p.id != 12);

        let err = rows.into_products().unwrap_err();
        assert!(err.to_string().contains("variation 5"));
    }
}
