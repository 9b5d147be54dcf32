//! Domain service - business logic orchestration

use super::draft::ProductDraft;
use super::repository::{CategoryRepository, PageRepository, ProductRepository};
use super::validation;
use crate::config::Config;
use crate::contract::{Category, Page, Product, ProductCreate, ProductEdit, ShopError};
use std::sync::Arc;

/// Domain service for the shop product catalog
pub struct Service {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
    pages: Arc<dyn PageRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        pages: Arc<dyn PageRepository>,
        config: Config,
    ) -> Self {
        Self {
            products,
            categories,
            pages,
            config,
        }
    }

    // ===== Product Operations =====

    /// List all products of a category. An unknown category yields an empty list.
    pub async fn list_products(&self, category_id: i32) -> Result<Vec<Product>, ShopError> {
        let products = self.products.find_by_category(category_id).await?;
        tracing::debug!(category_id, count = products.len(), "listed products");
        Ok(products)
    }

    /// Get a product within a category
    pub async fn get_product(&self, category_id: i32, product_id: i32) -> Result<Product, ShopError> {
        let found = self.products.find_by_key(category_id, product_id).await?;
        tracing::debug!(category_id, product_id, found = found.is_some(), "get product");

        found.ok_or_else(|| ShopError::not_found("Product", product_id))
    }

    /// Delete a product and everything it owns
    pub async fn delete_product(&self, category_id: i32, product_id: i32) -> Result<(), ShopError> {
        let product = self.get_product(category_id, product_id).await?;

        self.products.delete(product.id).await?;

        tracing::info!(category_id, product_id, "deleted product");
        Ok(())
    }

    /// Create a product together with its prices, variations, attributes and
    /// inventory lines
    pub async fn create_product(&self, input: ProductCreate) -> Result<Product, ShopError> {
        let draft = ProductDraft::from_create(&input);

        self.validate(&draft).await?;

        let product = self.products.upsert(&draft).await?;

        tracing::info!(
            product_id = product.id,
            category_id = product.category_id,
            page_id = product.page_id,
            variations = product.variations.len(),
            "created product"
        );
        Ok(product)
    }

    /// Overwrite a product and replace its child collections wholesale
    pub async fn edit_product(&self, input: ProductEdit) -> Result<Product, ShopError> {
        let mut draft = ProductDraft::from_edit(&input);

        self.validate(&draft).await?;

        let existing = self
            .products
            .find_by_id(input.id)
            .await?
            .ok_or_else(|| ShopError::not_found("Product", input.id))?;

        draft.bind_to(&existing)?;

        let product = self.products.upsert(&draft).await?;

        tracing::info!(
            product_id = product.id,
            category_id = product.category_id,
            previous_category_id = existing.category_id,
            variations = product.variations.len(),
            "edited product"
        );
        Ok(product)
    }

    // ===== Category / Page Operations =====

    /// Register a new category
    pub async fn register_category(&self, name: &str) -> Result<Category, ShopError> {
        validation::validate_name("Category", name, self.config.max_name_length)?;

        let category = self.categories.create(name).await?;
        tracing::info!(category_id = category.id, "registered category");
        Ok(category)
    }

    /// Get a category by id
    pub async fn get_category(&self, category_id: i32) -> Result<Category, ShopError> {
        let found = self.categories.find_by_id(category_id).await?;
        tracing::debug!(category_id, found = found.is_some(), "get category");

        found.ok_or_else(|| ShopError::not_found("Category", category_id))
    }

    /// Register a new page
    pub async fn register_page(&self, name: &str) -> Result<Page, ShopError> {
        validation::validate_name("Page", name, self.config.max_name_length)?;

        let page = self.pages.create(name).await?;
        tracing::info!(page_id = page.id, "registered page");
        Ok(page)
    }

    /// Get a page by id
    pub async fn get_page(&self, page_id: i32) -> Result<Page, ShopError> {
        let found = self.pages.find_by_id(page_id).await?;
        tracing::debug!(page_id, found = found.is_some(), "get page");

        found.ok_or_else(|| ShopError::not_found("Page", page_id))
    }

    // ===== Helper Methods =====

    /// Checks shared by create and edit; all of them run before any write.
    async fn validate(&self, draft: &ProductDraft) -> Result<(), ShopError> {
        validation::validate_product_fields(draft, self.config.max_name_length)?;

        if !self.pages.exists(draft.page_id).await? {
            return Err(ShopError::not_found("Page", draft.page_id));
        }

        if !self.categories.exists(draft.category_id).await? {
            return Err(ShopError::not_found("Category", draft.category_id));
        }

        validation::validate_variation_names(draft.variation_names())
    }
}
