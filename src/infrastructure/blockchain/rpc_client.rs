//! EVM RPC client for pool lookups and quoter simulations

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use async_trait::async_trait;
use tracing::trace;

use super::contracts::UniswapV3Quoter;
use crate::domain::chain::{PoolContract, PoolContractProvider, QuoteParams, QuoteProvider};
use crate::shared::errors::ChainError;

/// Alloy provider wrapper bound to one quoter deployment
#[derive(Debug, Clone)]
pub struct EvmRpcClient<P> {
    provider: P,
    quoter: Address,
}

impl<P: Provider + Clone> EvmRpcClient<P> {
    pub fn new(provider: P, quoter: Address) -> Self {
        Self { provider, quoter }
    }

    pub fn quoter(&self) -> Address {
        self.quoter
    }

    /// Chain id reported by the node
    pub async fn chain_id(&self) -> Result<u64, ChainError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ChainError::Rpc(format!("Failed to get chain id: {}", e)))
    }
}

#[async_trait]
impl<P: Provider + Clone> PoolContractProvider for EvmRpcClient<P> {
    async fn pool_contract(&self, address: Address) -> Result<PoolContract, ChainError> {
        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|e| ChainError::Rpc(format!("Failed to get code at {}: {}", address, e)))?;

        if code.is_empty() {
            return Err(ChainError::PoolNotDeployed(address));
        }

        trace!(pool = %address, bytes = code.len(), "pool contract found");
        Ok(PoolContract { address })
    }
}

#[async_trait]
impl<P: Provider + Clone> QuoteProvider for EvmRpcClient<P> {
    async fn quote_exact_input_single(&self, params: QuoteParams) -> Result<U256, ChainError> {
        let quoter = UniswapV3Quoter::new(self.quoter, self.provider.clone());

        quoter
            .quoteExactInputSingle(
                params.token_in,
                params.token_out,
                params.fee_tier.as_u24(),
                params.amount_in,
                params.sqrt_price_limit_x96,
            )
            .call()
            .await
            .map_err(|e| ChainError::CallReverted(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fee_tier::FeeTier;
    use alloy::primitives::{aliases::U160, Bytes, U64};
    use alloy::providers::{ProviderBuilder, RootProvider};
    use alloy::transports::mock::Asserter;

    fn client(asserter: &Asserter) -> EvmRpcClient<RootProvider> {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        EvmRpcClient::new(provider, Address::repeat_byte(0x0c))
    }

    fn params() -> QuoteParams {
        QuoteParams {
            token_in: Address::repeat_byte(1),
            token_out: Address::repeat_byte(2),
            fee_tier: FeeTier::Low,
            amount_in: U256::from(1_000u64),
            sqrt_price_limit_x96: U160::ZERO,
        }
    }

    #[tokio::test]
    async fn test_deployed_pool_resolves() {
        let asserter = Asserter::new();
        asserter.push_success(&Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]));
        let pool = Address::repeat_byte(0xaa);

        let contract = client(&asserter).pool_contract(pool).await.unwrap();
        assert_eq!(contract.address, pool);
    }

    #[tokio::test]
    async fn test_empty_code_is_not_deployed() {
        let asserter = Asserter::new();
        asserter.push_success(&Bytes::new());
        let pool = Address::repeat_byte(0xaa);

        let result = client(&asserter).pool_contract(pool).await;
        assert!(matches!(result, Err(ChainError::PoolNotDeployed(a)) if a == pool));
    }

    #[tokio::test]
    async fn test_code_lookup_failure_is_rpc_error() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("header not found");

        let result = client(&asserter).pool_contract(Address::repeat_byte(0xaa)).await;
        assert!(matches!(result, Err(ChainError::Rpc(_))));
    }

    #[tokio::test]
    async fn test_quote_decodes_amount_out() {
        let asserter = Asserter::new();
        let amount_out = U256::from(1_800_000_000u64);
        asserter.push_success(&Bytes::from(amount_out.to_be_bytes::<32>().to_vec()));

        let quote = client(&asserter).quote_exact_input_single(params()).await.unwrap();
        assert_eq!(quote, amount_out);
    }

    #[tokio::test]
    async fn test_failed_quote_is_call_error() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("execution reverted");

        let result = client(&asserter).quote_exact_input_single(params()).await;
        assert!(matches!(result, Err(ChainError::CallReverted(_))));
    }

    #[tokio::test]
    async fn test_chain_id() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(56u64));

        let client = client(&asserter);
        assert_eq!(client.chain_id().await.unwrap(), 56);
        assert_eq!(client.quoter(), Address::repeat_byte(0x0c));
    }
}
