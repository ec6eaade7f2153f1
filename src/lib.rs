//! Long-tail router - best-rate Uniswap V3 pool selection for EVM swaps
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use application::{LongTailQuoteService, LongTailRoute, PoolDeployment};
pub use domain::fee_tier::{AggregatorContract, FeeTier};
pub use domain::pool::{
    fetch_quotes, generate_pool_addresses, resolve_pool_contracts, select_best_rate, BestRate,
};
pub use shared::types::TokenIdentity;
