// src/blockchain/services/distribution.rs

use crate::blockchain::client::Getters;
use crate::blockchain::models::RequestResult;
use crate::blockchain::services::aggregate::merge_responses;
use serde_json::Value;

impl Getters {
    /// Withdraw-address changes and reward withdrawals by `address`, plus
    /// commission withdrawals by `val_address`.
    pub async fn distribution_txs(
        &self,
        address: &str,
        val_address: Option<&str>,
    ) -> RequestResult<Vec<Value>> {
        let val = val_address.unwrap_or("");
        let paths = [
            format!("/txs?action=set_withdraw_address&delegator={}", address),
            format!("/txs?action=withdraw_delegator_reward&delegator={}", address),
            format!(
                "/txs?action=withdraw_validator_rewards_all&source-validator={}",
                val
            ),
        ];
        merge_responses(paths.each_ref().map(|path| self.get(path))).await
    }

    /// Rewards a delegator has pending with one validator.
    ///
    /// An empty-ish body (`null`, `false`, `0`, `""`) reads as no rewards.
    pub async fn delegator_rewards_from_validator(
        &self,
        delegator_address: &str,
        validator_address: &str,
    ) -> RequestResult<Value> {
        let rewards = self
            .get(&format!(
                "/distribution/delegators/{}/rewards/{}",
                delegator_address, validator_address
            ))
            .await?;

        Ok(if is_falsy(&rewards) {
            Value::Array(Vec::new())
        } else {
            rewards
        })
    }

    pub async fn distribution_parameters(&self) -> RequestResult<Value> {
        self.get("/distribution/parameters").await
    }

    pub async fn distribution_outstanding_rewards(&self) -> RequestResult<Value> {
        self.get("/distribution/outstanding_rewards").await
    }

    pub async fn annual_provisioned_tokens(&self) -> RequestResult<Value> {
        self.get("/minting/annual-provisions").await
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
