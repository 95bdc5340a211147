mod chat;
mod config;
mod dashboard;
mod errors;
mod llm_client;
mod mentor;
mod models;
mod routes;
mod state;
mod upload;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("chat") => {
            let relay_url = args.next().unwrap_or_else(|| config.relay_url.clone());
            chat::repl::run(&relay_url).await
        }
        None | Some("serve") => serve(config).await,
        Some(other) => anyhow::bail!("unknown command {other:?}; expected `serve` or `chat [relay-url]`"),
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting CareerLens API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone())?;
    info!("LLM client initialized (model: {})", state.llm.model());
    if !state.llm.is_configured() {
        warn!("OPENAI_API_KEY is not set; mentor chat requests will fail");
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
