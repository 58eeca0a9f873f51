use crate::config::PostgresConfig;

use sqlx::postgres::{PgPool, PgPoolOptions};

pub async fn connect(db_config: &PostgresConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .connect(&db_config.url)
        .await
}
