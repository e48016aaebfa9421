use photo_roulette::config::Config;
use photo_roulette::server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photo_roulette=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()
        .map_err(|e| format!("Failed to load configuration (is CLIENT_ID set?): {}", e))?;

    tracing::info!("Starting photo-roulette server...");
    server::run(config).await
}
