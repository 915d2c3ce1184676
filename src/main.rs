use std::sync::Arc;

use anyhow::Context;

use foot_api::config::Config;
use foot_api::database::{
    connection::get_db_pool, memory::InMemoryStore, mysql::MySqlStore, Repositories,
};
use foot_api::{build_router, logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init_logger();

    let config = Config::from_env()?;

    let repositories = match &config.database {
        Some(database) => {
            let pool = get_db_pool(database)
                .await
                .context("Failed to create database pool")?;
            tracing::info!("🗄️ Using MySQL store");
            Repositories::from_store(Arc::new(MySqlStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, serving the seeded in-memory store");
            Repositories::from_store(Arc::new(InMemoryStore::seeded()))
        }
    };

    let app = build_router(AppState::new(repositories));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Server running on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
