//! Module wiring and lifecycle: init, migrate, REST registration

use crate::config::Config;
use crate::contract::ShopApi;
use crate::domain::Service;
use crate::infra::storage::{SeaOrmCategoryRepository, SeaOrmPageRepository, SeaOrmProductRepository};
use anyhow::{Context, Result};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shop service module
///
/// The host calls [`migrate`](Self::migrate) (optionally), then
/// [`init`](Self::init), then [`register_rest`](Self::register_rest).
#[derive(Default)]
pub struct ShopServiceModule {
    service: RwLock<Option<Arc<Service>>>,
}

impl ShopServiceModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build repositories and the domain service on top of `db`
    pub fn init(&self, db: Arc<DatabaseConnection>, cfg: Config) -> Result<()> {
        let max_name_length = cfg.max_name_length;

        let products = Arc::new(SeaOrmProductRepository::new(db.clone()));
        let categories = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let pages = Arc::new(SeaOrmPageRepository::new(db));

        let service = Arc::new(Service::new(products, categories, pages, cfg));
        *self.service.write() = Some(service);

        tracing::info!(max_name_length, "Shop service initialized");
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None)
            .await
            .context("failed to run shop service migrations")?;
        tracing::info!("Shop service migrations completed");
        Ok(())
    }

    /// Mount the shop REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering shop service REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn ShopApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
