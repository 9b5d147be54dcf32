//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{extract::Path, http::StatusCode, Json};
use std::sync::Arc;

// ===== Product Handlers =====

/// List products of a category
pub async fn list_products(
    service: Arc<Service>,
    Path(category_id): Path<i32>,
) -> Result<Json<ProductsListResponse>, Problem> {
    let products = service
        .list_products(category_id)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<ProductDto> = products.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(ProductsListResponse { items, total }))
}

/// Get a specific product
pub async fn get_product(
    service: Arc<Service>,
    Path((category_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<ProductDto>, Problem> {
    let product = service
        .get_product(category_id, product_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(product.into()))
}

/// Create a product in a category
pub async fn create_product(
    service: Arc<Service>,
    Path(category_id): Path<i32>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), Problem> {
    let product = service
        .create_product(req.into_contract(category_id))
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Replace a product
pub async fn edit_product(
    service: Arc<Service>,
    Path((category_id, product_id)): Path<(i32, i32)>,
    Json(req): Json<EditProductRequest>,
) -> Result<Json<ProductDto>, Problem> {
    let product = service
        .edit_product(req.into_contract(category_id, product_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(product.into()))
}

/// Delete a product
pub async fn delete_product(
    service: Arc<Service>,
    Path((category_id, product_id)): Path<(i32, i32)>,
) -> Result<StatusCode, Problem> {
    service
        .delete_product(category_id, product_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Category / Page Handlers =====

pub async fn register_category(
    service: Arc<Service>,
    Json(req): Json<RegisterNamedRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), Problem> {
    let category = service
        .register_category(&req.name)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn get_category(
    service: Arc<Service>,
    Path(category_id): Path<i32>,
) -> Result<Json<CategoryDto>, Problem> {
    let category = service
        .get_category(category_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

pub async fn register_page(
    service: Arc<Service>,
    Json(req): Json<RegisterNamedRequest>,
) -> Result<(StatusCode, Json<PageDto>), Problem> {
    let page = service
        .register_page(&req.name)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(page.into())))
}

pub async fn get_page(
    service: Arc<Service>,
    Path(page_id): Path<i32>,
) -> Result<Json<PageDto>, Problem> {
    let page = service.get_page(page_id).await.map_err(map_domain_error)?;

    Ok(Json(page.into()))
}
