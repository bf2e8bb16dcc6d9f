// src/blockchain/services/staking.rs

use crate::blockchain::client::Getters;
use crate::blockchain::models::{RequestResult, ValidatorStatus};
use crate::blockchain::services::aggregate::merge_responses;
use serde_json::Value;
use tracing::info;

impl Getters {
    /// Staking transactions touching `address`, plus validator-side actions for `val_address`.
    pub async fn staking_txs(
        &self,
        address: &str,
        val_address: Option<&str>,
    ) -> RequestResult<Vec<Value>> {
        let val = val_address.unwrap_or("");
        let paths = [
            format!("/txs?action=create_validator&destination-validator={}", val),
            format!("/txs?action=edit_validator&destination-validator={}", val),
            format!("/txs?action=delegate&delegator={}", address),
            format!("/txs?action=begin_redelegate&delegator={}", address),
            format!("/txs?action=begin_unbonding&delegator={}", address),
            format!("/txs?action=unjail&source-validator={}", val),
        ];
        merge_responses(paths.each_ref().map(|path| self.get(path))).await
    }

    // Get all delegations information from a delegator
    pub async fn delegations(&self, address: &str) -> RequestResult<Value> {
        self.get(&format!("/staking/delegators/{}/delegations", address)).await
    }

    /// Unbonding delegations. A 404 here means "none", so no retries.
    pub async fn undelegations(&self, address: &str) -> RequestResult<Value> {
        self.get_with_attempts(
            &format!("/staking/delegators/{}/unbonding_delegations", address),
            1,
        )
        .await
    }

    pub async fn redelegations(&self, address: &str) -> RequestResult<Value> {
        self.get(&format!("/staking/redelegations?delegator={}", address)).await
    }

    /// Every validator candidate: unbonding, then bonded, then unbonded.
    pub async fn validators(&self) -> RequestResult<Vec<Value>> {
        info!("Fetching all validators from REST endpoint: {}", self.url());
        let paths =
            ValidatorStatus::ALL.map(|status| format!("/staking/validators?status={}", status));
        merge_responses(paths.each_ref().map(|path| self.get(path))).await
    }

    // Get information from a validator
    pub async fn validator(&self, address: &str) -> RequestResult<Value> {
        self.get(&format!("/staking/validators/{}", address)).await
    }

    /// The delegation between one delegator and one validator. Single attempt.
    pub async fn delegation(
        &self,
        delegator_address: &str,
        validator_address: &str,
    ) -> RequestResult<Value> {
        self.get_with_attempts(
            &format!(
                "/staking/delegators/{}/delegations/{}",
                delegator_address, validator_address
            ),
            1,
        )
        .await
    }

    pub async fn pool(&self) -> RequestResult<Value> {
        self.get("/staking/pool").await
    }

    pub async fn staking_parameters(&self) -> RequestResult<Value> {
        self.get("/staking/parameters").await
    }
}
