use chatrelay::telemetry;
use chatrelay::{ChatRouter, RelayConfig, RelayError};

#[tokio::main]
async fn main() -> Result<(), RelayError> {
    let _guard = telemetry::init_from_env()?;
    let config = RelayConfig::from_env()?;

    for key in config.missing_credentials() {
        tracing::warn!(variable = key, "Credential not set; models that need it will fail");
    }
    if config.backend_url.is_none() {
        tracing::warn!("BACKEND_URL not set");
    }

    let router = ChatRouter::from_config(&config)?;
    chatrelay::server::serve(router, config.listen_addr, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
