//! EssentialAI Web Server
//!
//! Run with: cargo run -p essentialai-web

use essentialai_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("essentialai=debug,tower_http=info,info")),
        )
        .init();

    info!("Starting EssentialAI Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!(
        "Configuration loaded. Predictor mode: {:?}, endpoint: {}",
        config.predictor.mode, config.predictor.endpoint
    );

    let addr = config.bind_addr();

    // Create app state
    let state = essentialai_web::state::AppState::new(config)?;

    // Build router
    let app = essentialai_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
