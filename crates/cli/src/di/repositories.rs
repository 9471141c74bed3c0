use focusgate_infrastructure::repositories::{SqliteHistoryRepository, SqliteSiteRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub sites: Arc<SqliteSiteRepository>,
    pub history: Arc<SqliteHistoryRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            sites: Arc::new(SqliteSiteRepository::new(pool.clone())),
            history: Arc::new(SqliteHistoryRepository::new(pool)),
        }
    }
}
