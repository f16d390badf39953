mod campaign;
mod config;
mod errors;
mod gateway;
mod llm_client;
mod refine;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::{AiGateway, GatewaySettings};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Campaign API v{}", env!("CARGO_PKG_VERSION"));

    if config.should_warn_missing_key() {
        warn!("Missing GEMINI_API_KEY environment variable. AI features will fail.");
    }

    let gemini = GeminiClient::new(config.gemini_base_url.clone(), config.request_timeout)?;
    let gateway = AiGateway::new(GatewaySettings::from(&config), Arc::new(gemini));
    info!("AI gateway initialized (model: {})", gateway.model());

    let state = AppState {
        gateway,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
