use std::sync::Arc;

use anyhow::Context;
use benbot_relay::{config::Config, init_logging, routes, state::AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env();
    if config.api_key.is_none() {
        warn!("DEEPSEEK_API_KEY is not set; /chat will answer with a misconfiguration notice");
    }
    info!(origins = ?config.allowed_origins, upstream = %config.api_url, "configuration loaded");

    let address = config.address();
    let state = Arc::new(AppState::new(config).context("failed to build upstream HTTP client")?);
    let app = routes::create_app(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!("🚀 BenBot relay running at http://{address}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
