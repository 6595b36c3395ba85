use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CalculationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to make credentialed cross-origin requests.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    // Local development frontends
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://localhost:5174".to_string(),
    ]
}

impl CalculationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let allowed_origins = match env::var("APP_CORS_ALLOWED_ORIGINS") {
            Ok(value) => value
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            Err(_) => default_allowed_origins(),
        };

        Ok(CalculationConfig {
            common,
            cors: CorsConfig { allowed_origins },
        })
    }
}
