// src/config.rs

use crate::blockchain::models::{ChainId, ChainType};
use anyhow::{Context, Result, anyhow};
use std::env;

/// Retry budget applied to gateway requests unless a call site overrides it.
pub const DEFAULT_RETRIES: u32 = 4;

/// Public Harmony shard 0 endpoint used for balance lookups.
pub const DEFAULT_BALANCE_RPC_URL: &str = "https://api.s0.t.hmny.io";

/// Settings for the secondary balance endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRpcConfig {
    pub url: String,
    pub chain_type: ChainType,
    pub chain_id: ChainId,
}

impl Default for BalanceRpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BALANCE_RPC_URL.to_string(),
            chain_type: ChainType::Harmony,
            chain_id: ChainId::Default,
        }
    }
}

// Read once at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rest_url: String,
    pub balance_rpc: BalanceRpcConfig,
    pub retries: u32,
}

impl Config {
    /// Defaults for everything except the gateway URL.
    pub fn new(rest_url: impl Into<String>) -> Self {
        Self {
            rest_url: rest_url.into(),
            balance_rpc: BalanceRpcConfig::default(),
            retries: DEFAULT_RETRIES,
        }
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rest_url = lookup("GATEWAY_REST_URL")
            .context("GATEWAY_REST_URL must be set to the REST gateway base URL")?;

        let chain_type = match lookup("BALANCE_CHAIN_TYPE") {
            Some(raw) => raw
                .parse()
                .context("BALANCE_CHAIN_TYPE must be one of hmy, harmony, eth, ethereum")?,
            None => ChainType::default(),
        };

        let chain_id = match lookup("BALANCE_CHAIN_ID") {
            Some(raw) => raw
                .parse()
                .context("BALANCE_CHAIN_ID must be a known chain name or id")?,
            None => ChainId::default(),
        };

        let retries: u32 = lookup("GATEWAY_RETRIES")
            .unwrap_or_else(|| DEFAULT_RETRIES.to_string())
            .parse()
            .context("GATEWAY_RETRIES must be a valid number")?;
        if retries == 0 {
            return Err(anyhow!("GATEWAY_RETRIES must be at least 1"));
        }

        Ok(Config {
            rest_url,
            balance_rpc: BalanceRpcConfig {
                url: lookup("BALANCE_RPC_URL")
                    .unwrap_or_else(|| DEFAULT_BALANCE_RPC_URL.to_string()),
                chain_type,
                chain_id,
            },
            retries,
        })
    }
}
