// src/blockchain/services/explorer.rs

use crate::blockchain::client::Getters;
use crate::blockchain::models::RequestResult;
use crate::blockchain::services::aggregate::{merge_lists, merge_responses};
use futures::future::FutureExt;
use serde_json::Value;

impl Getters {
    /// Every transaction `address` took part in: bank, governance, distribution, staking.
    pub async fn txs(&self, address: &str) -> RequestResult<Vec<Value>> {
        merge_lists([
            self.bank_txs(address).boxed(),
            self.governance_txs(address).boxed(),
            self.distribution_txs(address, None).boxed(),
            self.staking_txs(address, None).boxed(),
        ])
        .await
    }

    /// Sends from and receipts to `address`.
    pub async fn bank_txs(&self, address: &str) -> RequestResult<Vec<Value>> {
        let paths = [
            format!("/txs?sender={}", address),
            format!("/txs?recipient={}", address),
        ];
        merge_responses(paths.each_ref().map(|path| self.get(path))).await
    }

    pub async fn txs_by_height(&self, height: &str) -> RequestResult<Value> {
        self.get(&format!("/txs?tx.height={}", height)).await
    }

    pub async fn block(&self, height: &str) -> RequestResult<Value> {
        self.get(&format!("/blocks/{}", height)).await
    }
}
