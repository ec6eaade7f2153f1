//! Error handling for the application

use alloy::primitives::Address;
use thiserror::Error;

/// Long-tail routing errors
///
/// Only caller precondition violations end up here. A pool that is missing
/// or fails to quote is never an error, it is simply absent from results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LongTailError {
    #[error("Cannot build a pool from identical tokens: {0}")]
    IdenticalTokens(Address),

    #[error("Tokens are on different chains: {0} and {1}")]
    ChainMismatch(u64, u64),

    #[error("Unsupported chain id: {0}")]
    UnsupportedChain(u64),

    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),

    #[error("Unknown fee tier: {0}")]
    UnknownFeeTier(u32),

    #[error("Unknown aggregator contract: {0}")]
    UnknownAggregator(Address),
}

/// Chain-related errors
#[derive(Error, Debug, Clone)]
pub enum ChainError {
    #[error("No pool deployed at {0}")]
    PoolNotDeployed(Address),

    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("Contract call reverted: {0}")]
    CallReverted(String),
}
