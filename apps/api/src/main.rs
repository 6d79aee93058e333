mod advisor;
mod config;
mod crew;
mod errors;
mod extract;
mod llm_client;
mod render;
mod routes;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::crew::SequentialCrew;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::SearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging before config so credential warnings are visible
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fails on a missing OpenAI key; the server never binds
    let config = Config::load()?;

    info!("Starting Resume Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_base_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Web search is optional; the job researcher degrades without it
    let search = config
        .serper_api_key
        .clone()
        .map(|key| SearchClient::new(key, config.serper_base_url.clone()));
    info!("Web search {}", if search.is_some() { "enabled" } else { "disabled" });

    let state = AppState {
        config: config.clone(),
        orchestrator: Arc::new(SequentialCrew::new(llm, search)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
