use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the database API, e.g. `http://database:8080`.
    pub database_api_endpoint: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // Left unvalidated: an empty endpoint only breaks purchase enrichment.
        let database_api_endpoint = std::env::var("DATABASE_API_ENDPOINT").unwrap_or_default();
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>()?,
            Err(_) => 3000,
        };
        Ok(Self {
            database_api_endpoint,
            host,
            port,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
