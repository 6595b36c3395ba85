use calculation_service::config::{CalculationConfig, CorsConfig};
use calculation_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = CalculationConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            cors: CorsConfig::default(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
