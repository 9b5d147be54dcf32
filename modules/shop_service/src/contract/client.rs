//! Native client trait for inter-module communication
//!
//! Other modules (pages, checkout) talk to the shop through this trait.
//! NO HTTP - direct function calls.

use super::{
    error::ShopError,
    model::{Category, Page, Product, ProductCreate, ProductEdit},
};
use async_trait::async_trait;

/// Shop service API for inter-module communication
#[async_trait]
pub trait ShopApi: Send + Sync {
    // ===== Product Operations =====

    /// List all products of a category
    async fn list_products(&self, category_id: i32) -> Result<Vec<Product>, ShopError>;

    /// Get a product within a category
    async fn get_product(&self, category_id: i32, product_id: i32) -> Result<Product, ShopError>;

    /// Create a product with its variations, attributes and inventory
    async fn create_product(&self, input: ProductCreate) -> Result<Product, ShopError>;

    /// Replace a product and its child collections
    async fn edit_product(&self, input: ProductEdit) -> Result<Product, ShopError>;

    /// Delete a product and everything it owns
    async fn delete_product(&self, category_id: i32, product_id: i32) -> Result<(), ShopError>;

    // ===== Category / Page Operations =====

    async fn register_category(&self, name: &str) -> Result<Category, ShopError>;

    async fn get_category(&self, category_id: i32) -> Result<Category, ShopError>;

    async fn register_page(&self, name: &str) -> Result<Page, ShopError>;

    async fn get_page(&self, page_id: i32) -> Result<Page, ShopError>;
}
