//! # Shepherd DB
//!
//! PostgreSQL pool initialization and the embedded schema migrations.
//!
//! # Example
//!
//! ```ignore
//! use shepherd_db::{MIGRATOR, init_db_pool};
//!
//! let pool = init_db_pool(&database_url).await?;
//! MIGRATOR.run(&pool).await?;
//! ```

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

/// Migrations under the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects a pool to `database_url`.
///
/// The pool is cheaply cloneable and lives in the application state.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    tracing::info!("Database pool initialized");
    Ok(pool)
}

/// Connects and applies pending migrations.
pub async fn init_and_migrate(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = init_db_pool(database_url).await?;
    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations applied");
    Ok(pool)
}
