//! Field-level validation of shop input models

use super::draft::ProductDraft;
use crate::contract::ShopError;
use rust_decimal::Decimal;

/// Digits after the decimal point a stored price keeps
pub const PRICE_SCALE: u32 = 2;

/// Exclusive bound on price magnitude: 16 digits of precision, 2 of them fractional
const PRICE_LIMIT: Decimal = Decimal::from_parts(276_447_232, 23_283, 0, false, 0);

/// Validate a product, category or page name
///
/// Names must contain a non-whitespace character and be at most `max_len`
/// characters long.
pub fn validate_name(kind: &str, name: &str, max_len: usize) -> Result<(), ShopError> {
    if name.trim().is_empty() {
        return Err(ShopError::validation(format!("{kind} name is required")));
    }

    let len = name.chars().count();
    if len > max_len {
        return Err(ShopError::validation(format!(
            "{kind} name is {len} characters long, the limit is {max_len}"
        )));
    }

    Ok(())
}

/// Validate the shape of a product draft before any lookup happens
pub fn validate_product_fields(draft: &ProductDraft, max_name_len: usize) -> Result<(), ShopError> {
    validate_name("Product", &draft.name, max_name_len)?;

    validate_price("Product", draft.price.amount)?;
    for v in &draft.variations {
        validate_price("Variation", v.price.amount)?;
    }
    for a in &draft.attributes {
        validate_price("Attribute", a.price.amount)?;
    }

    if let Some(inv) = draft.location_inventories.iter().find(|inv| inv.count < 0) {
        return Err(ShopError::validation(format!(
            "Inventory count cannot be negative (got {})",
            inv.count
        )));
    }

    Ok(())
}

/// A price must fit the stored column exactly: at most two decimal places
/// (trailing zeros ignored) and below 10^14 in magnitude.
pub fn validate_price(kind: &str, amount: Decimal) -> Result<(), ShopError> {
    if amount.normalize().scale() > PRICE_SCALE {
        return Err(ShopError::validation(format!(
            "{kind} price {amount} has more than {PRICE_SCALE} decimal places"
        )));
    }

    if amount.abs() >= PRICE_LIMIT {
        return Err(ShopError::validation(format!(
            "{kind} price {amount} is out of range"
        )));
    }

    Ok(())
}

/// Every variation must have a name
///
/// Whitespace-only names are accepted; only the empty string is rejected.
pub fn validate_variation_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), ShopError> {
    if names.into_iter().any(str::is_empty) {
        return Err(ShopError::invalid_action("Variation name cannot be empty"));
    }
    Ok(())
}
