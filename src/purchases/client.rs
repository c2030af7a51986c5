use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Failure of a single outbound request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Issues one request and hands back the body untouched.
#[async_trait]
pub trait RawFetcher: Send + Sync {
    async fn fetch_raw(
        &self,
        url: &str,
        method: Method,
        timeout: Duration,
    ) -> Result<String, RequestError>;
}

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RawFetcher for HttpClient {
    async fn fetch_raw(
        &self,
        url: &str,
        method: Method,
        timeout: Duration,
    ) -> Result<String, RequestError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                RequestError::Timeout(timeout)
            } else {
                RequestError::Transport(e)
            }
        };

        let res = self
            .http
            .request(method, url)
            .timeout(timeout)
            .send()
            .await
            .map_err(map_err)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(RequestError::Status(status));
        }

        res.text().await.map_err(map_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as AxumStatus, routing::get, Router};

    async fn spawn_downstream() -> String {
        let app = Router::new()
            .route("/ok", get(|| async { r#"[{"item":"book"}]"# }))
            .route("/created", get(|| async { (AxumStatus::CREATED, "[]") }))
            .route("/boom", get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    "[]"
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn returns_raw_body_on_200() {
        let base = spawn_downstream().await;
        let body = HttpClient::new()
            .fetch_raw(&format!("{base}/ok"), Method::GET, Duration::from_secs(5))
            .await
            .expect("fetch ok");
        assert_eq!(body, r#"[{"item":"book"}]"#);
    }

    #[tokio::test]
    async fn non_200_is_an_error() {
        let base = spawn_downstream().await;
        let client = HttpClient::new();

        let err = client
            .fetch_raw(&format!("{base}/boom"), Method::GET, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));

        let err = client
            .fetch_raw(&format!("{base}/created"), Method::GET, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Status(s) if s == StatusCode::CREATED));
    }

    #[tokio::test]
    async fn slow_downstream_times_out() {
        let base = spawn_downstream().await;
        let err = HttpClient::new()
            .fetch_raw(&format!("{base}/slow"), Method::GET, Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Timeout(_)));
    }

    #[tokio::test]
    async fn relative_url_is_a_transport_error() {
        let err = HttpClient::new()
            .fetch_raw("/api/userpurchase?uid=1", Method::GET, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
