// src/infrastructure/database.rs
use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

const MAX_CONNECTIONS: u32 = 16;

/// Opens the pool, retrying transient connection failures.
///
/// Makes at most `max_attempts` attempts (at least one) and sleeps `delay`
/// between them. The last error is returned once attempts run out.
pub async fn connect_with_retry(
    database_url: &str,
    max_attempts: u32,
    delay: Duration,
) -> Result<PgPool, sqlx::Error> {
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!(attempt, "database connection established");
                return Ok(pool);
            }
            Err(err) if attempt < max_attempts => {
                tracing::warn!(
                    error = %err,
                    attempt,
                    max_attempts,
                    retry_in_secs = delay.as_secs(),
                    "database connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
