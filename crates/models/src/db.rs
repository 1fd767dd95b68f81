use std::time::Duration;

use anyhow::Context;
use configs::{AppConfig, DatabaseConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Open the pool described by `cfg` and verify it with a round trip.
/// The pool is closed again if the ping fails.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.connection_url());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt)
        .await
        .with_context(|| format!("connecting to {}:{}/{}", cfg.host, cfg.port, cfg.name))?;

    if let Err(e) = db.ping().await {
        let _ = db.close().await;
        return Err(e).context("database did not answer ping");
    }
    info!(host = %cfg.host, port = cfg.port, database = %cfg.name, "database connected");
    Ok(db)
}

/// Connect using `config.toml` plus `DB_*` / `DATABASE_URL` from the environment.
pub async fn connect_from_env() -> anyhow::Result<DatabaseConnection> {
    let _ = dotenvy::dotenv();
    let cfg = AppConfig::load_and_validate()?;
    connect(&cfg.database).await
}

