//! TruthCore API server entry point.

mod app;
mod config;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verification::{GrokModel, Pipeline, TavilySearch};
use xai_client::XaiClient;

use crate::app::build_app;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,verification=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TruthCore claim-verification API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(model = %config.model, "Configuration loaded");

    // Build the pipeline once; it is stateless across requests.
    let xai = XaiClient::new(&config.xai_api_key).with_timeout(config.llm_timeout);
    let model = GrokModel::new(xai, &config.model);
    let search = TavilySearch::new(&config.tavily_api_key);
    let pipeline = Pipeline::new(model, search, config.pipeline_config());

    let app = build_app(pipeline);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
