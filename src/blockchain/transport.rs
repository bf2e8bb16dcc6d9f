// src/blockchain/transport.rs

use crate::blockchain::models::{RequestError, RequestResult};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::debug;

/// Raw GET against the REST gateway. Returns the response body as text.
#[async_trait]
pub trait RestTransport: Send + Sync {
    async fn get_text(&self, url: &str) -> RequestResult<String>;

    /// Like `get_text`, but any HTTP reply counts as success, whatever its status.
    async fn get_body(&self, url: &str) -> RequestResult<String>;
}

/// Native balance lookup on the secondary RPC endpoint.
///
/// Implementations return the balance already rendered as a szabo amount.
#[async_trait]
pub trait BalanceQuery: Send + Sync {
    async fn balance(&self, address: &str) -> anyhow::Result<String>;
}

/// `RestTransport` backed by a shared reqwest client.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    pub fn new(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RestTransport for HttpTransport {
    async fn get_text(&self, url: &str) -> RequestResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    async fn get_body(&self, url: &str) -> RequestResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))
    }
}
