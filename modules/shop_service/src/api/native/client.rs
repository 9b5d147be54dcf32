//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Category, Page, Product, ProductCreate, ProductEdit, ShopApi, ShopError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that calls the domain service directly, without HTTP.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ShopApi for NativeClient {
    async fn list_products(&self, category_id: i32) -> Result<Vec<Product>, ShopError> {
        self.service.list_products(category_id).await
    }

    async fn get_product(&self, category_id: i32, product_id: i32) -> Result<Product, ShopError> {
        self.service.get_product(category_id, product_id).await
    }

    async fn create_product(&self, input: ProductCreate) -> Result<Product, ShopError> {
        self.service.create_product(input).await
    }

    async fn edit_product(&self, input: ProductEdit) -> Result<Product, ShopError> {
        self.service.edit_product(input).await
    }

    async fn delete_product(&self, category_id: i32, product_id: i32) -> Result<(), ShopError> {
        self.service.delete_product(category_id, product_id).await
    }

    async fn register_category(&self, name: &str) -> Result<Category, ShopError> {
        self.service.register_category(name).await
    }

    async fn get_category(&self, category_id: i32) -> Result<Category, ShopError> {
        self.service.get_category(category_id).await
    }

    async fn register_page(&self, name: &str) -> Result<Page, ShopError> {
        self.service.register_page(name).await
    }

    async fn get_page(&self, page_id: i32) -> Result<Page, ShopError> {
        self.service.get_page(page_id).await
    }
}
