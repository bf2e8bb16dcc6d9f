// src/blockchain/mod.rs

// Declare the `client` module holding the request executor.
pub mod client;
// Declare the `models` module for blockchain-related data structures.
pub mod models;

pub mod services;
pub mod transport;
