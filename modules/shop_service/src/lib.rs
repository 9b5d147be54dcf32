//! Shop Service Module
//!
//! Product catalog for Meredith pages: products grouped by category, each with
//! a base price, priced variations and attributes, and per-location inventory.

// Public exports
pub mod contract;
pub use contract::{
    client::ShopApi, error::ShopError, Category, Page, Price, Product, ProductCreate, ProductEdit,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::ShopServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
