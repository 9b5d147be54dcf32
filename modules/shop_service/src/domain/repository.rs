//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use super::draft::ProductDraft;
use crate::contract::{Category, Page, Product};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for product aggregates
///
/// Every read returns fully loaded aggregates: base price, variations and
/// attributes with their prices, inventory lines with their locations.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products of a category, ordered by id
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>>;

    /// Find a product by category and id
    async fn find_by_key(&self, category_id: i32, product_id: i32) -> Result<Option<Product>>;

    /// Find a product by id regardless of category
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>>;

    /// Insert the draft when it has no id, otherwise replace the stored
    /// aggregate with it. Runs in a single transaction.
    async fn upsert(&self, draft: &ProductDraft) -> Result<Product>;

    /// Delete a product with its variations, attributes, inventory lines and
    /// owned prices. Locations are kept.
    async fn delete(&self, product_id: i32) -> Result<()>;
}

/// Repository for product categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<Category>;

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>>;

    async fn exists(&self, category_id: i32) -> Result<bool>;
}

/// Repository for pages
#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<Page>;

    async fn find_by_id(&self, page_id: i32) -> Result<Option<Page>>;

    async fn exists(&self, page_id: i32) -> Result<bool>;
}
