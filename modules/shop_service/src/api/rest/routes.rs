//! Route registration for the shop REST API

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all shop routes on the given router
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Product endpoints
        .route(
            "/shop/categories/{category_id}/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/shop/categories/{category_id}/products/{product_id}",
            get(get_product_handler)
                .put(edit_product_handler)
                .delete(delete_product_handler),
        )
        // Category / page registry
        .route("/shop/categories", post(register_category_handler))
        .route("/shop/categories/{category_id}", get(get_category_handler))
        .route("/shop/pages", post(register_page_handler))
        .route("/shop/pages/{page_id}", get(get_page_handler))
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====
//
// Extractor rejections are turned into problem responses through `?`.

async fn list_products_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProductsListResponse>, Problem> {
    handlers::list_products(service, path?).await
}

async fn get_product_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<Json<ProductDto>, Problem> {
    handlers::get_product(service, path?).await
}

async fn create_product_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    json: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductDto>), Problem> {
    handlers::create_product(service, path?, json?).await
}

async fn edit_product_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    json: Result<Json<EditProductRequest>, JsonRejection>,
) -> Result<Json<ProductDto>, Problem> {
    handlers::edit_product(service, path?, json?).await
}

async fn delete_product_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<StatusCode, Problem> {
    handlers::delete_product(service, path?).await
}

async fn register_category_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<RegisterNamedRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryDto>), Problem> {
    handlers::register_category(service, json?).await
}

async fn get_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<CategoryDto>, Problem> {
    handlers::get_category(service, path?).await
}

async fn register_page_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<RegisterNamedRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PageDto>), Problem> {
    handlers::register_page(service, json?).await
}

async fn get_page_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PageDto>, Problem> {
    handlers::get_page(service, path?).await
}
