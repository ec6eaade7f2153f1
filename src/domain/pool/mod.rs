//! Pool domain - candidate derivation, resolution, quoting and selection

mod pool_address;
mod pool_map;
mod pool_resolver;
mod quote_fetcher;
mod rate_selector;

pub use pool_address::{
    compute_pool_address, generate_pool_addresses, generate_pool_addresses_with_init_code_hash,
    POOL_INIT_CODE_HASH,
};
pub use pool_map::PoolMap;
pub use pool_resolver::resolve_pool_contracts;
pub use quote_fetcher::fetch_quotes;
pub use rate_selector::select_best_rate;

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::domain::fee_tier::FeeTier;

/// Canonically ordered token pair and fee tier a pool address was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolCandidate {
    pub token0: Address,
    pub token1: Address,
    pub fee_tier: FeeTier,
}

/// Live pool with the swap direction requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPool {
    pub fee_tier: FeeTier,
    pub token_in: Address,
    pub token_out: Address,
}

/// Candidate pools keyed by computed address, in fee tier order
pub type PoolCandidates = PoolMap<PoolCandidate>;

/// Resolved pools keyed by address, in candidate order
pub type ResolvedPools = PoolMap<ResolvedPool>;

/// Quoted output amounts keyed by pool address. Absent pools failed or do not exist.
pub type QuoteResult = PoolMap<U256>;

/// Pool offering the greatest output amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestRate {
    pub pool_address: Address,
    pub amount_out: U256,
}
