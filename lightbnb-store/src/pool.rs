//! Database connection pool management
//!
//! One `PgPool` is created at startup and shared by every store operation.
//! Connections are opened lazily, so building the pool never blocks on the
//! server being reachable; the first query surfaces connection errors.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DbConfig;

/// How long a query waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a PostgreSQL connection pool from configuration.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::load(None)?);
/// ```
pub fn create_pool(config: &DbConfig) -> PgPool {
    create_pool_with_options(config, config.max_connections)
}

/// Create a PostgreSQL connection pool with an explicit connection limit.
pub fn create_pool_with_options(config: &DbConfig, max_connections: u32) -> PgPool {
    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections,
        "creating connection pool"
    );

    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(config.connect_options())
}
