// tests/common/mod.rs

#![allow(dead_code)]

pub mod server;

use async_trait::async_trait;
use staking_getters::Getters;
use staking_getters::RequestError;
use staking_getters::blockchain::transport::{BalanceQuery, RestTransport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

pub const BASE_URL: &str = "http://gateway.test";

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "staking_getters=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

struct Route {
    failures_left: usize,
    failure: RequestError,
    body: Result<String, RequestError>,
    // Body sent along with an error status
    reply: Option<String>,
}

/// In-memory gateway. Unrouted URLs answer `[]`.
#[derive(Default)]
pub struct MockGateway {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answers `path` with `body` every time.
    pub fn respond(&self, path: &str, body: &str) {
        self.flaky(path, 0, body);
    }

    /// Fails `path` with a network error `failures` times, then answers `body`.
    pub fn flaky(&self, path: &str, failures: usize, body: &str) {
        self.routes.lock().unwrap().insert(
            format!("{}{}", BASE_URL, path),
            Route {
                failures_left: failures,
                failure: RequestError::Network("connection reset".into()),
                body: Ok(body.to_string()),
                reply: None,
            },
        );
    }

    /// Fails `path` with `error` on every attempt.
    pub fn fail(&self, path: &str, error: RequestError) {
        self.routes.lock().unwrap().insert(
            format!("{}{}", BASE_URL, path),
            Route {
                failures_left: 0,
                failure: error.clone(),
                body: Err(error),
                reply: None,
            },
        );
    }

    /// Replies to `path` with a non-2xx `status` carrying `body`.
    pub fn respond_status(&self, path: &str, status: u16, body: &str) {
        let url = format!("{}{}", BASE_URL, path);
        self.routes.lock().unwrap().insert(
            url.clone(),
            Route {
                failures_left: 0,
                failure: RequestError::Network("unused".into()),
                body: Err(RequestError::Status { status, url }),
                reply: Some(body.to_string()),
            },
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        let url = format!("{}{}", BASE_URL, path);
        self.calls().iter().filter(|c| **c == url).count()
    }
}

#[async_trait]
impl RestTransport for MockGateway {
    async fn get_text(&self, url: &str) -> Result<String, RequestError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(url) {
            Some(route) if route.failures_left > 0 => {
                route.failures_left -= 1;
                Err(route.failure.clone())
            }
            Some(route) => route.body.clone(),
            None => Ok("[]".to_string()),
        }
    }

    async fn get_body(&self, url: &str) -> Result<String, RequestError> {
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(url)
            .filter(|route| route.failures_left == 0)
            .and_then(|route| route.reply.clone());

        match reply {
            Some(body) => {
                self.calls.lock().unwrap().push(url.to_string());
                Ok(body)
            }
            None => self.get_text(url).await,
        }
    }
}

/// Balance source that either answers a fixed amount or always fails.
pub struct MockBalances {
    pub amount: Option<String>,
}

#[async_trait]
impl BalanceQuery for MockBalances {
    async fn balance(&self, address: &str) -> anyhow::Result<String> {
        self.amount
            .clone()
            .ok_or_else(|| anyhow::anyhow!("balance rpc unreachable for {}", address))
    }
}

pub fn getters(gateway: &Arc<MockGateway>) -> Getters {
    getters_with_balance(gateway, Some("1.5"))
}

pub fn getters_with_balance(gateway: &Arc<MockGateway>, amount: Option<&str>) -> Getters {
    init_tracing();
    Getters::with_transports(
        BASE_URL,
        gateway.clone(),
        Arc::new(MockBalances {
            amount: amount.map(str::to_string),
        }),
    )
}
