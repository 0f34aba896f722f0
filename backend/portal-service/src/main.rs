use actix_web::{web, App, HttpServer};
use anyhow::{anyhow, Context, Result};
use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_service::config::Config;
use portal_service::db::{ChannelDirectory, PgChannelDirectory};
use portal_service::handlers;
use portal_service::notice::NoticeCookie;
use portal_service::services::ChannelResolver;

const SERVICE_NAME: &str = "portal-service";

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portal_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()
        .map_err(|e| anyhow!(e))
        .context("Failed to load configuration")?;

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let missing = config.playback.missing_settings();
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "Playback settings are empty; composed playback URLs will be incomplete"
        );
    }

    let mut db_cfg = DbPoolConfig::from_env(SERVICE_NAME).unwrap_or_default();
    db_cfg.service_name = SERVICE_NAME.to_string();
    if db_cfg.database_url.is_empty() {
        db_cfg.database_url = config.database.url.clone();
    }
    db_cfg.max_connections = std::cmp::max(db_cfg.max_connections, config.database.max_connections);
    db_cfg.log_config();

    let pool = create_pg_pool(db_cfg)
        .await
        .context("Failed to create database pool")?;

    let directory: Arc<dyn ChannelDirectory> = Arc::new(PgChannelDirectory::new(pool));
    let resolver = web::Data::new(ChannelResolver::new(directory, config.playback.clone()));
    let notices = web::Data::new(NoticeCookie::new(config.notice.clone()));

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(resolver.clone())
            .app_data(notices.clone())
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
