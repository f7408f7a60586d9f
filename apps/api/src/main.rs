mod config;
mod errors;
mod llm_client;
mod publish;
mod routes;
mod site;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::publish::NetlifyPublisher;
use crate::routes::build_router;
use crate::site::extractor::SiteExtractor;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting medsite v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    let extractor = Arc::new(SiteExtractor::new(Arc::new(llm)));

    // Initialize publisher. Missing hosting credentials only fail at publish time.
    let publisher = Arc::new(NetlifyPublisher::new(&config)?);
    if config.netlify_auth_token.is_none() || config.netlify_site_id.is_none() {
        warn!("NETLIFY_AUTH_TOKEN or NETLIFY_SITE_ID is not set; publishing will fail");
    } else {
        info!("Netlify publisher initialized");
    }

    // Build app state
    let state = AppState {
        extractor,
        publisher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
