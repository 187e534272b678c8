//! Signalix API Server
//!
//! Computes indicators and aggregated signals for client-supplied candles and
//! runs the CryptoCompare-backed analysis for catalogue pairs.

use dotenvy::dotenv;
use signalix::config::{get_environment, Config};
use signalix::core::http::start_server;
use signalix::logging;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    info!(
        environment = %get_environment(),
        address = %config.bind_address(),
        upstream = %config.cryptocompare_api_url,
        timeout_secs = config.request_timeout.as_secs(),
        max_retries = config.max_retries,
        "Starting Signalix API Server"
    );
    if config.cryptocompare_api_key.is_none() {
        warn!("CRYPTOCOMPARE_API_KEY not set; upstream requests are anonymous");
    }

    let server = tokio::spawn(async move { start_server(&config).await.map_err(|e| e.to_string()) });

    tokio::select! {
        _ = signal::ctrl_c() => info!("Shutdown signal received"),
        result = server => match result {
            Ok(Ok(())) => info!("HTTP server exited"),
            Ok(Err(e)) => error!(error = %e, "HTTP server error"),
            Err(e) => error!(error = %e, "HTTP server task panicked"),
        },
    }

    Ok(())
}
