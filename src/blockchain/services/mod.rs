// src/blockchain/services/mod.rs

pub mod aggregate;
pub mod balance;
pub mod distribution;
pub mod explorer;
pub mod governance;
pub mod staking;
