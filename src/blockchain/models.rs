// src/blockchain/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// --- Error types for gateway requests ---

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("gateway returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode gateway response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, RequestError::Network(_) | RequestError::Status { .. })
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RequestError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => RequestError::Network(err.to_string()),
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;

// --- Account Models ---

/// A single denomination balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Account view rebuilt from the balance RPC on every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub coins: Vec<Coin>,
    pub sequence: String,
    pub account_number: String,
}

impl Account {
    /// Placeholder returned when the balance lookup fails.
    pub fn empty(address: &str) -> Self {
        Self {
            address: address.to_string(),
            coins: Vec::new(),
            sequence: "0".to_string(),
            account_number: "0".to_string(),
        }
    }
}

// --- Staking Models ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorStatus {
    Unbonding,
    Bonded,
    Unbonded,
}

impl ValidatorStatus {
    /// Partitions in the order the validator listing merges them.
    pub const ALL: [ValidatorStatus; 3] = [
        ValidatorStatus::Unbonding,
        ValidatorStatus::Bonded,
        ValidatorStatus::Unbonded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorStatus::Unbonding => "unbonding",
            ValidatorStatus::Bonded => "bonded",
            ValidatorStatus::Unbonded => "unbonded",
        }
    }
}

impl fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Balance RPC chain settings ---

/// Which JSON-RPC namespace the balance endpoint speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainType {
    #[default]
    Harmony,
    Ethereum,
}

impl ChainType {
    pub fn rpc_prefix(&self) -> &'static str {
        match self {
            ChainType::Harmony => "hmy",
            ChainType::Ethereum => "eth",
        }
    }
}

impl FromStr for ChainType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hmy" | "harmony" => Ok(ChainType::Harmony),
            "eth" | "ethereum" => Ok(ChainType::Ethereum),
            other => Err(anyhow::anyhow!("Unknown chain type: {}", other)),
        }
    }
}

/// Network identifiers understood by the balance endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainId {
    #[default]
    Default,
    EthMainnet,
    Morden,
    Ropsten,
    Rinkeby,
    Kovan,
    HmyMainnet,
    HmyTestnet,
    HmyLocal,
    HmyPangaea,
}

impl ChainId {
    pub fn value(&self) -> u64 {
        match self {
            ChainId::Default => 0,
            ChainId::EthMainnet | ChainId::HmyMainnet => 1,
            ChainId::Morden | ChainId::HmyTestnet | ChainId::HmyLocal => 2,
            ChainId::Ropsten | ChainId::HmyPangaea => 3,
            ChainId::Rinkeby => 4,
            ChainId::Kovan => 42,
        }
    }

    /// Maps a bare numeric id onto the Harmony network it names.
    fn from_harmony_number(id: u64) -> Option<Self> {
        match id {
            0 => Some(ChainId::Default),
            1 => Some(ChainId::HmyMainnet),
            2 => Some(ChainId::HmyTestnet),
            3 => Some(ChainId::HmyPangaea),
            _ => None,
        }
    }
}

impl FromStr for ChainId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u64>() {
            return ChainId::from_harmony_number(id)
                .ok_or_else(|| anyhow::anyhow!("Unsupported numeric chain id: {}", id));
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "default" => Ok(ChainId::Default),
            "ethmainnet" => Ok(ChainId::EthMainnet),
            "morden" => Ok(ChainId::Morden),
            "ropsten" => Ok(ChainId::Ropsten),
            "rinkeby" => Ok(ChainId::Rinkeby),
            "kovan" => Ok(ChainId::Kovan),
            "hmymainnet" | "mainnet" => Ok(ChainId::HmyMainnet),
            "hmytestnet" | "testnet" => Ok(ChainId::HmyTestnet),
            "hmylocal" | "local" => Ok(ChainId::HmyLocal),
            "hmypangaea" | "pangaea" => Ok(ChainId::HmyPangaea),
            _ => Err(anyhow::anyhow!("Unknown chain id: {}", trimmed)),
        }
    }
}
