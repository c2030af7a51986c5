use crate::config::AppConfig;
use crate::purchases::{
    client::{HttpClient, RawFetcher},
    services::PurchaseService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub purchases: PurchaseService,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        if config.database_api_endpoint.is_empty() {
            tracing::warn!("DATABASE_API_ENDPOINT is not set; purchase lookups will fall back to empty lists");
        } else {
            tracing::info!(endpoint = %config.database_api_endpoint, "database api configured");
        }

        let fetcher = Arc::new(HttpClient::new()) as Arc<dyn RawFetcher>;
        let purchases = PurchaseService::new(fetcher, config.database_api_endpoint.clone());

        Ok(Self::from_parts(config, purchases))
    }

    pub fn from_parts(config: Arc<AppConfig>, purchases: PurchaseService) -> Self {
        Self { config, purchases }
    }

    #[cfg(test)]
    pub fn fake(fetcher: Arc<dyn RawFetcher>) -> Self {
        let config = Arc::new(AppConfig {
            database_api_endpoint: "http://database.test".into(),
            host: "127.0.0.1".into(),
            port: 0,
        });
        let purchases = PurchaseService::new(fetcher, config.database_api_endpoint.clone());
        Self::from_parts(config, purchases)
    }
}
