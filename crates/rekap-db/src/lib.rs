//! # Rekap DB
//!
//! PostgreSQL connection pool and embedded schema migrations.
//!
//! # Example
//!
//! ```ignore
//! use rekap_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     run_migrations(&pool).await.expect("migrations failed");
//! }
//! ```

use std::env;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Migrations under `migrations/` at the workspace root, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from `DATABASE_URL`. The pool size can be tuned
/// with `DATABASE_MAX_CONNECTIONS` (default: 10).
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!(max_connections, "database connected");
    pool
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
