//! SeaORM entities for database tables
//!
//! | Entity                   | Table                               |
//! |--------------------------|-------------------------------------|
//! | Page                     | `pages`                             |
//! | Category                 | `shop_categories`                   |
//! | Price                    | `shop_prices`                       |
//! | Location                 | `shop_locations`                    |
//! | Product                  | `shop_products`                     |
//! | Variation                | `shop_variations`                   |
//! | ProductAttribute         | `shop_product_attributes`           |
//! | ProductLocationInventory | `shop_product_location_inventories` |

pub mod category;
pub mod location;
pub mod page;
pub mod price;
pub mod product;
pub mod product_attribute;
pub mod product_location_inventory;
pub mod variation;
