//! Chain interface traits

use alloy::primitives::{aliases::U160, Address, U256};
use async_trait::async_trait;

use crate::domain::fee_tier::FeeTier;
use crate::shared::errors::ChainError;

/// Read-only handle to a deployed pool contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolContract {
    pub address: Address,
}

/// Parameters of a single-pool exact-input quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee_tier: FeeTier,
    pub amount_in: U256,
    /// Zero means no price limit
    pub sqrt_price_limit_x96: U160,
}

/// Builds live pool contract handles
#[async_trait]
pub trait PoolContractProvider: Send + Sync {
    /// Fails when nothing usable is deployed at `address`
    async fn pool_contract(&self, address: Address) -> Result<PoolContract, ChainError>;
}

/// Simulates quoter calls
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn quote_exact_input_single(&self, params: QuoteParams) -> Result<U256, ChainError>;
}
