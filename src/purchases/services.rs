use std::{sync::Arc, time::Duration};

use reqwest::Method;
use tracing::{debug, warn};

use super::client::RawFetcher;
use super::dto::{Enrichment, Purchase};

pub const PURCHASE_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Looks up purchases on the database API.
#[derive(Clone)]
pub struct PurchaseService {
    fetcher: Arc<dyn RawFetcher>,
    endpoint: String,
    timeout: Duration,
}

impl PurchaseService {
    pub fn new(fetcher: Arc<dyn RawFetcher>, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            timeout: PURCHASE_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn purchases_url(&self, user_id: i64) -> String {
        format!("{}/api/userpurchase?uid={}", self.endpoint, user_id)
    }

    /// Never fails: any downstream problem degrades to [`Enrichment::Fallback`].
    pub async fn get_purchases(&self, user_id: i64) -> Enrichment {
        let url = self.purchases_url(user_id);

        let body = match self.fetcher.fetch_raw(&url, Method::GET, self.timeout).await {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, user_id, %url, "purchase lookup failed");
                return Enrichment::Fallback;
            }
        };

        match serde_json::from_str::<Vec<Purchase>>(&body) {
            Ok(list) => {
                debug!(user_id, count = list.len(), "purchases fetched");
                Enrichment::Fetched(list)
            }
            Err(e) => {
                warn!(error = %e, user_id, "purchase response is not a JSON array");
                Enrichment::Fallback
            }
        }
    }
}
