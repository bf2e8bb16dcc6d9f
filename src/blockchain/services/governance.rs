// src/blockchain/services/governance.rs

use crate::blockchain::client::Getters;
use crate::blockchain::models::RequestResult;
use crate::blockchain::services::aggregate::merge_responses;
use serde_json::Value;

impl Getters {
    pub async fn proposals(&self) -> RequestResult<Value> {
        self.get("/gov/proposals").await
    }

    pub async fn proposal(&self, proposal_id: &str) -> RequestResult<Value> {
        self.get(&format!("/gov/proposals/{}", proposal_id)).await
    }

    pub async fn proposal_votes(&self, proposal_id: &str) -> RequestResult<Value> {
        self.get(&format!("/gov/proposals/{}/votes", proposal_id)).await
    }

    pub async fn proposal_deposits(&self, proposal_id: &str) -> RequestResult<Value> {
        self.get(&format!("/gov/proposals/{}/deposits", proposal_id)).await
    }

    pub async fn proposal_tally(&self, proposal_id: &str) -> RequestResult<Value> {
        self.get(&format!("/gov/proposals/{}/tally", proposal_id)).await
    }

    pub async fn gov_deposit_parameters(&self) -> RequestResult<Value> {
        self.get("/gov/parameters/deposit").await
    }

    pub async fn gov_tallying_parameters(&self) -> RequestResult<Value> {
        self.get("/gov/parameters/tallying").await
    }

    pub async fn gov_voting_parameters(&self) -> RequestResult<Value> {
        self.get("/gov/parameters/voting").await
    }

    /// Proposals submitted, deposits made and votes cast by `address`.
    pub async fn governance_txs(&self, address: &str) -> RequestResult<Vec<Value>> {
        let paths = [
            format!("/txs?action=submit_proposal&proposer={}", address),
            format!("/txs?action=deposit&depositor={}", address),
            format!("/txs?action=vote&voter={}", address),
        ];
        merge_responses(paths.each_ref().map(|path| self.get(path))).await
    }
}
