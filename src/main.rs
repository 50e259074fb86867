use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prorata::config::{Config, LogFormat};
use prorata::core::{Clock, SiteClock};
use prorata::modules::{self, health};
use prorata::{checkout, levels, settings};

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("prorata={},actix_web=info", log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app.log_level, config.app.log_format);

    tracing::info!("Starting pro-rata membership fee service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections, table prefix {})",
        config.database.max_connections,
        config.database.table_prefix
    );

    let prefix = config.database.table_prefix.as_str();
    let settings_repo: Arc<dyn settings::SettingsRepository> = Arc::new(
        settings::MySqlSettingsRepository::new(db_pool.clone(), prefix),
    );
    let level_repo: Arc<dyn levels::LevelRepository> =
        Arc::new(levels::MySqlLevelRepository::new(db_pool.clone(), prefix));
    let snapshot_repo: Arc<dyn checkout::SnapshotRepository> = Arc::new(
        checkout::MySqlSnapshotRepository::new(db_pool.clone(), prefix),
    );
    let clock: Arc<dyn Clock> = Arc::new(
        SiteClock::from_offset_hours(config.app.site_utc_offset_hours)
            .context("Invalid site clock")?,
    );

    let checkout_service = Arc::new(checkout::CheckoutService::new(
        level_repo,
        settings_repo.clone(),
        snapshot_repo,
        clock,
        config.app.currency,
    ));
    let settings_service = Arc::new(settings::FeeSettingsService::new(
        settings_repo,
        config.app.currency,
    ));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(checkout_service.clone()))
            .app_data(web::Data::new(settings_service.clone()))
            .configure(health::controllers::configure)
            .configure(modules::configure_api)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    Ok(())
}
