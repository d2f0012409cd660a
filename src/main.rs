// src/main.rs
use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use product_api::{
    auth::credentials::UserStore, config::AppConfig, database, seed, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Create database pool and schema
    let db_pool = database::create_pool(&config.database_url)
        .await
        .context("Failed to create database pool")?;
    database::run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let users = UserStore::with_default_users(config.bcrypt_cost)
        .context("Failed to hash built-in user passwords")?;

    // Create application state
    let app_state = AppState::new(db_pool, users);

    seed::load_initial_products(&app_state.products)
        .await
        .context("Failed to load initial product data")?;

    let app = product_api::build_app(app_state);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                anyhow::bail!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
            }
        }
    };

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
