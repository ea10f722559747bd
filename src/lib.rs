pub mod config;
pub mod core;
pub mod web;

use anyhow::Context;

use crate::config::AppConfig;
use crate::core::feed::NewsService;
use crate::web::AppState;

/// Start the dashboard server and serve until the process is stopped.
pub async fn run() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let config = AppConfig::from_env();
    let news = NewsService::new(config.http_timeout).context("failed to build HTTP client")?;
    let bind_addr = config.bind_addr.clone();
    let app = web::router(AppState::new(config, news));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "dashboard listening");
    axum::serve(listener, app)
        .await
        .context("server terminated")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsdash=info")),
        )
        .init();
}
