use crate::blockchain::client::Getters;
use crate::blockchain::models::{Account, ChainType, Coin};
use crate::blockchain::transport::BalanceQuery;
use crate::config::BalanceRpcConfig;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, error, info};

/// Denomination reported for the native balance.
pub const NATIVE_DENOM: &str = "one";

const WEI_PER_SZABO: u128 = 1_000_000_000_000;

/// JSON-RPC balance lookup against a Harmony (or Ethereum-style) node.
#[derive(Clone)]
pub struct HarmonyRpc {
    client: Client,
    config: BalanceRpcConfig,
}

impl HarmonyRpc {
    pub fn new(client: Client, config: &BalanceRpcConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl BalanceQuery for HarmonyRpc {
    async fn balance(&self, address: &str) -> Result<String> {
        info!(
            "Attempting to fetch balance for address: {} on rpc_url: {}",
            address, self.config.url
        );

        let payload = balance_request(self.config.chain_type, address);
        debug!(
            "Sending RPC request to {} (chain id {}): {:?}",
            self.config.url,
            self.config.chain_id.value(),
            payload
        );

        let res: Value = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Received RPC response: {:?}", res);

        if let Some(err) = res.get("error").filter(|e| !e.is_null()) {
            return Err(anyhow!("RPC returned an error: {}", err));
        }

        let result = res["result"]
            .as_str()
            .ok_or_else(|| anyhow!("RPC response missing 'result' field: {:?}", res))?;

        wei_hex_to_szabo(result)
    }
}

fn balance_request(chain_type: ChainType, address: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": format!("{}_getBalance", chain_type.rpc_prefix()),
        "params": [address, "latest"],
        "id": 1
    })
}

/// Renders a hex wei amount as a decimal szabo string, e.g. `0x1bc16d674ec80000` -> `2000000`.
pub fn wei_hex_to_szabo(hex: &str) -> Result<String> {
    let digits = hex.trim_start_matches("0x");
    let wei = if digits.is_empty() {
        0
    } else {
        u128::from_str_radix(digits, 16)
            .with_context(|| format!("Failed to parse hex balance '{}'", hex))?
    };

    let whole = wei / WEI_PER_SZABO;
    let fraction = wei % WEI_PER_SZABO;
    if fraction == 0 {
        return Ok(whole.to_string());
    }

    let fraction = format!("{:012}", fraction);
    Ok(format!("{}.{}", whole, fraction.trim_end_matches('0')))
}

impl Getters {
    /// Looks up the native balance of `address`.
    ///
    /// Any failure is logged and answered with [`Account::empty`].
    pub async fn account(&self, address: &str) -> Account {
        let mut account = Account::empty(address);

        match self.balances().balance(address).await {
            Ok(amount) => {
                account.coins.push(Coin {
                    denom: NATIVE_DENOM.to_string(),
                    amount,
                });
            }
            Err(e) => {
                error!("Failed to fetch balance for {}: {:?}", address, e);
            }
        }

        account
    }
}
