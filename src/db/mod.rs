use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use crate::config::Config;

#[cfg(test)]
pub mod memory_store;
pub mod mysql_store;
pub mod store;

pub use mysql_store::MySqlAttendanceStore;
pub use store::AttendanceStore;

pub async fn init_db(config: &Config) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(pool)
}
