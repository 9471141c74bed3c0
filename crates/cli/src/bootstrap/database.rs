use focusgate_domain::config::DatabaseConfig;
use focusgate_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_url: &str, cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = create_pool(database_url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
