//! Resolution of candidate pool addresses into live pool contracts

use alloy::primitives::Address;
use futures::future::join_all;
use tracing::debug;

use super::{PoolCandidates, ResolvedPool, ResolvedPools};
use crate::domain::chain::PoolContractProvider;

/// Keep the candidates that resolve to a live pool, with the swap direction attached.
///
/// Most tiers have no deployed pool for a given pair, so a failed
/// resolution only drops that candidate.
///
/// Direction: `token_in` is token0 when token0 is the sell token, otherwise
/// token1; `token_out` is token1 when token1 is the buy token, otherwise
/// token0. When neither side matches this still picks a direction.
pub async fn resolve_pool_contracts(
    candidates: &PoolCandidates,
    client: &dyn PoolContractProvider,
    sell_token: Address,
    buy_token: Address,
) -> ResolvedPools {
    let lookups = candidates.iter().map(|(address, candidate)| async move {
        match client.pool_contract(*address).await {
            Ok(contract) => {
                let token_in = if candidate.token0 == sell_token {
                    candidate.token0
                } else {
                    candidate.token1
                };
                let token_out = if candidate.token1 == buy_token {
                    candidate.token1
                } else {
                    candidate.token0
                };
                Some((
                    contract.address,
                    ResolvedPool {
                        fee_tier: candidate.fee_tier,
                        token_in,
                        token_out,
                    },
                ))
            }
            Err(e) => {
                debug!(pool = %address, fee = %candidate.fee_tier, "skipping pool: {}", e);
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}
