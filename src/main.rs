mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::databases::postgres;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
}

async fn run() -> Result<(), AppError> {
    // Optional; deployments without a .env file rely on real env vars.
    let _ = dotenvy::dotenv();

    let config = AppConfig::load()?;

    let pool = postgres::connect(&config.postgres).await?;

    if config.postgres.migration {
        MIGRATOR.run(&pool).await?;
    }

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let container = Arc::new(Container::new(pool, &config.token));

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
