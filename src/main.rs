use dotenvy::dotenv;
use greeting_service::config::get_configuration;
use greeting_service::observability::init_tracing;
use greeting_service::startup::build_router;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration =
        get_configuration().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    init_tracing(&configuration.log_level);

    let app = build_router();

    let address = configuration.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting greeting-service on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
