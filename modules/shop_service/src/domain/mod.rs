//! Domain layer - business logic and services

pub mod draft;
pub mod repository;
pub mod service;
pub mod validation;

pub use draft::{InventoryDraft, LocationRef, PriceDraft, ProductDraft};
pub use repository::{CategoryRepository, PageRepository, ProductRepository};
pub use service::Service;
