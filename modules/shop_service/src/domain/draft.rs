//! Unsaved product aggregates handed to the repository
//!
//! A draft is the complete state the repository must persist. Rows with
//! `id: None` are inserted, rows with an id are overwritten in place, and
//! existing children missing from the draft are removed.

use crate::contract::{Product, ProductCreate, ProductEdit, ShopError};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: Option<i32>,
    pub name: String,
    pub category_id: i32,
    pub page_id: i32,
    pub price: PriceDraft,
    pub variations: Vec<VariationDraft>,
    pub attributes: Vec<AttributeDraft>,
    pub location_inventories: Vec<InventoryDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDraft {
    pub id: Option<i32>,
    pub amount: Decimal,
}

impl PriceDraft {
    fn fresh(amount: Decimal) -> Self {
        Self { id: None, amount }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationDraft {
    pub id: Option<i32>,
    pub name: String,
    pub price: PriceDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDraft {
    pub id: Option<i32>,
    pub name: String,
    pub price: PriceDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryDraft {
    pub id: Option<i32>,
    pub count: i32,
    pub location: LocationRef,
}

/// Location of an inventory line: synthesized on create, referenced on edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationRef {
    New { name: String },
    Existing(i32),
}

impl ProductDraft {
    /// Build a fresh aggregate. Every price and location is a new row.
    ///
    /// Each inventory line gets its own location named after the product; the
    /// create input has no way to name or reuse a location.
    pub fn from_create(input: &ProductCreate) -> Self {
        let variations = input
            .variations
            .iter()
            .map(|v| VariationDraft {
                id: None,
                name: v.name.clone(),
                price: PriceDraft::fresh(v.price),
            })
            .collect();

        let location_inventories = input
            .location_inventories
            .iter()
            .map(|inv| InventoryDraft {
                id: None,
                count: inv.count,
                location: LocationRef::New {
                    name: input.name.clone(),
                },
            })
            .collect();

        let attributes = input
            .attributes
            .iter()
            .map(|a| AttributeDraft {
                id: None,
                name: a.name.clone(),
                price: PriceDraft::fresh(a.price),
            })
            .collect();

        Self {
            id: None,
            name: input.name.clone(),
            category_id: input.category_id,
            page_id: input.page_id,
            price: PriceDraft::fresh(input.price),
            variations,
            attributes,
            location_inventories,
        }
    }

    /// Build a replacement aggregate carrying the identifiers from the input.
    ///
    /// The result is not ready to save until [`ProductDraft::bind_to`] has
    /// checked it against the stored product.
    pub fn from_edit(input: &ProductEdit) -> Self {
        Self {
            id: Some(input.id),
            name: input.name.clone(),
            category_id: input.category_id,
            page_id: input.page_id,
            price: PriceDraft {
                id: None,
                amount: input.price,
            },
            variations: input
                .variations
                .iter()
                .map(|v| VariationDraft {
                    id: v.id,
                    name: v.name.clone(),
                    price: PriceDraft {
                        id: v.price_id,
                        amount: v.price,
                    },
                })
                .collect(),
            attributes: input
                .attributes
                .iter()
                .map(|a| AttributeDraft {
                    id: a.id,
                    name: a.name.clone(),
                    price: PriceDraft {
                        id: a.price_id,
                        amount: a.price,
                    },
                })
                .collect(),
            location_inventories: input
                .location_inventories
                .iter()
                .map(|inv| InventoryDraft {
                    id: inv.id,
                    count: inv.count,
                    location: LocationRef::Existing(inv.location_id),
                })
                .collect(),
        }
    }

    /// Tie an edit draft to the stored aggregate it replaces.
    ///
    /// Every child id must belong to `existing` and appear at most once, and a
    /// child's price id must be the one it already owns. Blank price ids of
    /// kept children are filled in from `existing`; new children may not carry
    /// a price id at all.
    pub fn bind_to(&mut self, existing: &Product) -> Result<(), ShopError> {
        let product_id = existing.id;
        self.id = Some(product_id);
        self.price.id = Some(existing.price.id);

        let mut seen = HashSet::new();
        for v in &mut self.variations {
            bind_owned_price("variation", product_id, v.id, &mut v.price.id, &mut seen, |id| {
                existing
                    .variations
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.price.id)
            })?;
        }

        let mut seen = HashSet::new();
        for a in &mut self.attributes {
            bind_owned_price("attribute", product_id, a.id, &mut a.price.id, &mut seen, |id| {
                existing
                    .attributes
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.price.id)
            })?;
        }

        let mut seen = HashSet::new();
        for inv in &self.location_inventories {
            let Some(id) = inv.id else { continue };
            if !existing.location_inventories.iter().any(|e| e.id == id) {
                return Err(foreign_child("inventory line", id, product_id));
            }
            if !seen.insert(id) {
                return Err(duplicate_child("inventory line", id));
            }
        }

        Ok(())
    }

    pub fn variation_names(&self) -> impl Iterator<Item = &str> {
        self.variations.iter().map(|v| v.name.as_str())
    }
}

fn bind_owned_price(
    kind: &str,
    product_id: i32,
    child_id: Option<i32>,
    price_id: &mut Option<i32>,
    seen: &mut HashSet<i32>,
    owned_price: impl Fn(i32) -> Option<i32>,
) -> Result<(), ShopError> {
    let Some(id) = child_id else {
        return match *price_id {
            Some(given) => Err(ShopError::invalid_action(format!(
                "New {kind} cannot reuse price {given}"
            ))),
            None => Ok(()),
        };
    };

    let owned = owned_price(id).ok_or_else(|| foreign_child(kind, id, product_id))?;
    if !seen.insert(id) {
        return Err(duplicate_child(kind, id));
    }

    match *price_id {
        Some(given) if given != owned => Err(ShopError::invalid_action(format!(
            "Price {given} does not belong to {kind} {id}"
        ))),
        _ => {
            *price_id = Some(owned);
            Ok(())
        }
    }
}

fn foreign_child(kind: &str, id: i32, product_id: i32) -> ShopError {
    ShopError::invalid_action(format!("{kind} {id} does not belong to product {product_id}"))
}

fn duplicate_child(kind: &str, id: i32) -> ShopError {
    ShopError::invalid_action(format!("{kind} {id} is listed more than once"))
}
