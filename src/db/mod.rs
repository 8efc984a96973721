pub mod department_repository;
pub mod memory;

use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

pub use department_repository::{DepartmentRepository, PgDepartmentRepository};
pub use memory::InMemoryDepartmentRepository;

/// Connects to `database_url` and applies the embedded migrations.
pub async fn create_pool(database_url: &str, config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    info!("database migrations applied");

    Ok(pool)
}
