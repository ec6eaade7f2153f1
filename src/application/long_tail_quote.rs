//! Long-tail quote service: best Uniswap V3 pool for one leg of a trade

use alloy::primitives::{Address, B256, U256};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::chain::{PoolContractProvider, QuoteProvider};
use crate::domain::fee_tier::{AggregatorContract, FeeTier};
use crate::domain::pool::{
    fetch_quotes, generate_pool_addresses_with_init_code_hash, resolve_pool_contracts,
    select_best_rate, QuoteResult, ResolvedPools, POOL_INIT_CODE_HASH,
};
use crate::domain::token::wrapped_native_token;
use crate::domain::trade_type::TradeType;
use crate::shared::errors::LongTailError;
use crate::shared::types::TokenIdentity;

/// Where a deployment's pools live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolDeployment {
    pub factory: Address,
    pub init_code_hash: B256,
}

impl PoolDeployment {
    pub fn new(factory: Address) -> Self {
        Self {
            factory,
            init_code_hash: POOL_INIT_CODE_HASH,
        }
    }
}

/// Winning pool of a quote round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongTailRoute {
    pub pool_address: Address,
    pub fee_tier: FeeTier,
    pub aggregator: AggregatorContract,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub amount_out: U256,
}

/// Everything one quote round produced
#[derive(Debug, Clone)]
pub struct QuoteRound {
    pub candidate_count: usize,
    pub resolved: ResolvedPools,
    pub quotes: QuoteResult,
    pub best: Option<LongTailRoute>,
}

pub struct LongTailQuoteService {
    deployment: PoolDeployment,
    pools: Arc<dyn PoolContractProvider>,
    quoter: Arc<dyn QuoteProvider>,
}

impl LongTailQuoteService {
    pub fn new(
        deployment: PoolDeployment,
        pools: Arc<dyn PoolContractProvider>,
        quoter: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            deployment,
            pools,
            quoter,
        }
    }

    /// Run generation, resolution, quoting and selection for `sell -> buy`
    pub async fn quote_round(
        &self,
        sell: &TokenIdentity,
        buy: &TokenIdentity,
        amount_in: U256,
    ) -> Result<QuoteRound, LongTailError> {
        let candidates = generate_pool_addresses_with_init_code_hash(
            self.deployment.factory,
            sell,
            buy,
            self.deployment.init_code_hash,
        )?;
        debug!(
            sell = %sell.symbol,
            buy = %buy.symbol,
            candidates = candidates.len(),
            "generated pool candidates"
        );

        let resolved =
            resolve_pool_contracts(&candidates, self.pools.as_ref(), sell.address, buy.address)
                .await;
        info!(
            "🔍 {}/{} pools live for {} -> {}",
            resolved.len(),
            candidates.len(),
            sell.symbol,
            buy.symbol
        );

        let quotes = fetch_quotes(&resolved, amount_in, self.quoter.as_ref()).await;
        info!("📊 {} of {} pools quoted", quotes.len(), resolved.len());

        let best = select_best_rate(&quotes).and_then(|best| {
            resolved.get(&best.pool_address).map(|pool| LongTailRoute {
                pool_address: best.pool_address,
                fee_tier: pool.fee_tier,
                aggregator: pool.fee_tier.aggregator(),
                token_in: pool.token_in,
                token_out: pool.token_out,
                amount_in,
                amount_out: best.amount_out,
            })
        });

        match &best {
            Some(route) => info!(
                pool = %route.pool_address,
                fee = %route.fee_tier,
                amount_out = %route.amount_out,
                "✅ Best rate selected"
            ),
            None => warn!("No route available for {} -> {}", sell.symbol, buy.symbol),
        }

        Ok(QuoteRound {
            candidate_count: candidates.len(),
            resolved,
            quotes,
            best,
        })
    }

    /// Best pool for `sell -> buy`, or `None` when no pool can be quoted
    pub async fn best_route(
        &self,
        sell: &TokenIdentity,
        buy: &TokenIdentity,
        amount_in: U256,
    ) -> Result<Option<LongTailRoute>, LongTailError> {
        Ok(self.quote_round(sell, buy, amount_in).await?.best)
    }

    /// AMM leg needed for a trade of the given type.
    ///
    /// Long-tail sells swap into the chain's wrapped native token first;
    /// long-tail buys swap out of it. L1 to L1 trades need no AMM leg.
    pub async fn route_for_trade(
        &self,
        trade_type: TradeType,
        sell: &TokenIdentity,
        buy: &TokenIdentity,
        amount_in: U256,
    ) -> Result<Option<LongTailRoute>, LongTailError> {
        if trade_type.sells_long_tail() {
            let wrapped = wrapped_native_token(sell.chain_id)?;
            return self.best_route(sell, &wrapped, amount_in).await;
        }
        if trade_type.buys_long_tail() {
            let wrapped = wrapped_native_token(buy.chain_id)?;
            return self.best_route(&wrapped, buy, amount_in).await;
        }
        Ok(None)
    }
}
