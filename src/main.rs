//! Service entry point

use anyhow::Context;
use clap::Parser;
use property_service::api::rest;
use property_service::config::Config;
use property_service::domain::Service;
use property_service::infra::storage::{
    Migrator, SeaOrmLeaseRepository, SeaOrmTicketRepository,
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "property-service", about = "Property management service")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .init();

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to run migrations")?;
    }
    let db = Arc::new(db);

    let service = Arc::new(Service::new(
        Arc::new(SeaOrmTicketRepository::new(db.clone())),
        Arc::new(SeaOrmLeaseRepository::new(db)),
    ));

    let app = rest::router(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "property service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
