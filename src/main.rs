use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hmi_analyzer::analysis::Analyzer;
use hmi_analyzer::config::Config;
use hmi_analyzer::model::OpenAiClient;
use hmi_analyzer::server::{router, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HMI_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let model = OpenAiClient::new(&config);
    info!(model = model.model(), "using chat model");

    let state = AppState {
        analyzer: Analyzer::new(Arc::new(model)),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "HMI Analyzer listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
