use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use validator_dashboard::{api::dashboard_routes, DashboardService, ServerConfig};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().context("loading server configuration")?;
    tracing::info!(bind = %config.bind_address, "Starting validator_dashboard service");

    let service = web::Data::new(DashboardService::with_fixtures(config.fetch));
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .service(dashboard_routes())
    })
    .bind(&config.bind_address)
    .with_context(|| format!("binding {}", config.bind_address))?
    .run()
    .await?;

    Ok(())
}
