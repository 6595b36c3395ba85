use calculation_service::config::CalculationConfig;
use calculation_service::startup::Application;
use calculation_service::SERVICE_NAME;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    init_tracing(SERVICE_NAME, "info");

    let config = CalculationConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Calculation service listening on port {}", app.port());

    app.run_until_stopped().await
}
