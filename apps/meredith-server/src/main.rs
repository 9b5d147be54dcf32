//! Meredith server: hosts the shop service over HTTP

mod config;
mod logging;

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use config::AppConfig;
use sea_orm::{ConnectOptions, Database};
use shop_service::ShopServiceModule;
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "meredith-server", version, about = "Meredith shop server")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    logging::init(&cfg.logging)?;

    // every pooled connection to an in-memory SQLite URL opens its own database
    let max_connections = if cfg.database.url.contains(":memory:") {
        1
    } else {
        cfg.database.max_connections
    };

    let mut options = ConnectOptions::new(cfg.database.url.clone());
    options
        .max_connections(max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", cfg.database.url))?;
    let db = Arc::new(db);

    let shop = ShopServiceModule::new();
    if cfg.database.run_migrations {
        shop.migrate(&db).await?;
    }
    shop.init(db, cfg.shop.clone().into())?;

    let app = shop
        .register_rest(Router::new())?
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    info!(addr = %cfg.server.bind_addr, "Server running");

    let cancel = CancellationToken::new();
    tokio::spawn(watch_signals(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn watch_signals(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }

    cancel.cancel();
}
