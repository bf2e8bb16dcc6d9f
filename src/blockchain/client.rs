// src/blockchain/client.rs

use crate::blockchain::models::{RequestError, RequestResult};
use crate::blockchain::services::balance::HarmonyRpc;
use crate::blockchain::transport::{BalanceQuery, HttpTransport, RestTransport};
use crate::config::{Config, DEFAULT_RETRIES};
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

// --- Getters Implementation ---

/// Read-only accessor for the REST gateway and the balance RPC.
///
/// Endpoint methods live in `blockchain::services`; this file holds the
/// request executor they all delegate to.
#[derive(Clone)]
pub struct Getters {
    url: String,
    retries: u32,
    transport: Arc<dyn RestTransport>,
    balances: Arc<dyn BalanceQuery>,
}

impl Getters {
    /// Constructor for a client against `rest_url` with default balance RPC settings.
    pub fn new(rest_url: &str) -> Self {
        Self::from_config(&Config::new(rest_url))
    }

    /// Builds a client whose REST and RPC calls share one reqwest connection pool.
    pub fn from_config(config: &Config) -> Self {
        let client = ReqwestClient::new();
        info!(
            "Creating getters for gateway {} (balance rpc {}, chain {:?}/{:?})",
            config.rest_url,
            config.balance_rpc.url,
            config.balance_rpc.chain_type,
            config.balance_rpc.chain_id
        );

        let getters = Self::with_transports(
            &config.rest_url,
            Arc::new(HttpTransport::new(client.clone())),
            Arc::new(HarmonyRpc::new(client, &config.balance_rpc)),
        );
        getters.with_retries(config.retries)
    }

    /// Constructor taking explicit transports, used to swap the network out.
    pub fn with_transports(
        rest_url: &str,
        transport: Arc<dyn RestTransport>,
        balances: Arc<dyn BalanceQuery>,
    ) -> Self {
        Self {
            url: rest_url.to_string(),
            retries: DEFAULT_RETRIES,
            transport,
            balances,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn balances(&self) -> &dyn BalanceQuery {
        self.balances.as_ref()
    }

    /// GET `url + path` with the default retry budget and decode the body as JSON.
    pub async fn get(&self, path: &str) -> RequestResult<Value> {
        self.get_with_attempts(path, self.retries).await
    }

    /// GET `url + path`, trying at most `attempts` times.
    ///
    /// Each attempt is awaited before deciding whether to retry. Only transient
    /// failures are retried, immediately and without backoff. A budget of zero
    /// still makes one attempt.
    pub async fn get_with_attempts(&self, path: &str, attempts: u32) -> RequestResult<Value> {
        let url = format!("{}{}", self.url, path);
        let mut remaining = attempts.max(1);

        loop {
            let error = match self.transport.get_text(&url).await {
                Ok(body) => {
                    return serde_json::from_str(&body)
                        .map_err(|e| RequestError::Decode(e.to_string()));
                }
                Err(e) => e,
            };

            remaining -= 1;
            if remaining == 0 || !error.is_transient() {
                return Err(error);
            }
            warn!(
                "GET {} failed: {}. Retrying ({} attempts left)",
                url, error, remaining
            );
        }
    }

    // --- Meta ---

    /// Fetches the gateway's version string. Single attempt, no JSON decoding.
    ///
    /// Any HTTP reply is returned as-is, error statuses included; only a
    /// failure to get a reply at all is an error.
    pub async fn node_version(&self) -> RequestResult<String> {
        let url = format!("{}/node_version", self.url);
        self.transport.get_body(&url).await
    }

    /// Probes the gateway. Any reply means connected; no reply reads as disconnected.
    pub async fn connected(&self) -> bool {
        match self.node_version().await {
            Ok(version) => {
                debug!("Gateway {} reports version {}", self.url, version.trim());
                true
            }
            Err(e) => {
                debug!("Gateway {} unreachable: {}", self.url, e);
                false
            }
        }
    }
}
