//! Employee records server: reads config from the environment, bootstraps the database,
//! and serves `/api/employees` plus health routes.
//!
//! Run from repo root: `cargo run -p employee-records-server`

use employee_records::{
    app, apply_migrations, connect_pool, ensure_database_exists, AppState, PgEmployeeRepository,
    ServerConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("employee_records=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if config.auto_migrate {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = connect_pool(&config).await?;
    if config.auto_migrate {
        apply_migrations(&pool).await?;
    }

    let state = AppState::new(Arc::new(PgEmployeeRepository::new(pool)));
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
