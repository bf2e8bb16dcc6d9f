// src/lib.rs

pub mod blockchain;
pub mod config;

pub use blockchain::client::Getters;
pub use blockchain::models::{Account, Coin, RequestError, RequestResult};
pub use config::Config;
