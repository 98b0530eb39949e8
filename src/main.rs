use anyhow::Result;
use clap::Parser;
use meeting_bridge::{create_router, AppState, Config, MeetingRegistry, RestProvider};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "meeting-bridge", about = "Meeting lifecycle backend")]
struct Args {
    /// Path to the configuration file, without extension
    #[arg(long, default_value = "config/meeting-bridge")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );
    match &cfg.capture.sink_arn {
        Some(arn) => info!("Capture sink destination: {}", arn),
        None => info!("No capture sink destination configured; capture endpoints will fail"),
    }

    let provider = Arc::new(RestProvider::new(&cfg.provider));
    let registry = Arc::new(MeetingRegistry::new(provider, cfg.capture.sink_arn.clone()));
    let state = AppState::new(registry, cfg.provider.region.clone());

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}/", addr);

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
