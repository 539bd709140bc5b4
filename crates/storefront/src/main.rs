use anyhow::{Context, Result};
use shared::{config::Config, config::ConnectionManager, utils::init_logger};
use storefront::{handler::AppRouter, seeder, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("storefront", is_dev, enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to create database pool")?;

    if config.run_migrations {
        info!("🏗️ Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(pool, &config.jwt_secret, config.gemini_api_key.clone());

    if config.run_seed {
        seeder::seed_catalog(&state.di_container.product_repository)
            .await
            .context("Failed to seed catalog")?;
    }

    AppRouter::serve(config.port, state)
        .await
        .context("Server error")?;

    info!("🛑 Server stopped");
    Ok(())
}
