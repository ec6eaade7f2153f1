//! Concurrent per-pool quoting

use alloy::primitives::{aliases::U160, U256};
use futures::future::join_all;
use tracing::debug;

use super::{QuoteResult, ResolvedPools};
use crate::domain::chain::{QuoteParams, QuoteProvider};

/// Quote `amount_in` against every resolved pool at once.
///
/// Completes when every query has settled. A query that fails only removes
/// its own pool from the result; nothing is retried. Result order follows
/// `pools`, not completion order.
pub async fn fetch_quotes(
    pools: &ResolvedPools,
    amount_in: U256,
    quoter: &dyn QuoteProvider,
) -> QuoteResult {
    let queries = pools.iter().map(|(address, pool)| async move {
        let params = QuoteParams {
            token_in: pool.token_in,
            token_out: pool.token_out,
            fee_tier: pool.fee_tier,
            amount_in,
            sqrt_price_limit_x96: U160::ZERO,
        };

        match quoter.quote_exact_input_single(params).await {
            Ok(amount_out) => Some((*address, amount_out)),
            Err(e) => {
                debug!(pool = %address, fee = %pool.fee_tier, "quote failed: {}", e);
                None
            }
        }
    });

    join_all(queries).await.into_iter().flatten().collect()
}
