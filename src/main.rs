use crate::config::AppConfig;
use crate::data::FxClient;
use crate::routes::{router, AppState};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod error;
mod rates;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let client = FxClient::from_config(&config).expect("failed to build upstream HTTP client");

    let app = router(AppState { client });

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!(upstream = %config.api_base, "listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received, stopping");
}
