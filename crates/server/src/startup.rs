use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;
use service::activity::{repo::seaorm::SeaOrmActivityRepository, repository::ActivityRepository};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an arbitrary store; used by `run` and by tests with an in-memory store.
pub fn build_app(repo: Arc<dyn ActivityRepository>, cfg: &AppConfig) -> Router {
    let state = AppState::new(repo, &cfg.api);
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Public entry: connect, migrate, and serve until a shutdown signal arrives.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_and_validate().context("loading configuration")?;

    // Fatal when the database is unreachable or does not answer the ping
    let db = models::db::connect(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await.context("applying migrations")?;
    }

    let repo: Arc<dyn ActivityRepository> = Arc::new(SeaOrmActivityRepository::new(db.clone()));
    let app = build_app(repo, &cfg);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid bind address {}", cfg.server.bind_addr()))?;
    info!(
        %addr,
        validation = ?cfg.api.validation,
        legacy_status_codes = cfg.api.legacy_status_codes,
        "starting activity service"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await.context("closing database connection")?;
    info!("database connection closed");
    Ok(())
}
