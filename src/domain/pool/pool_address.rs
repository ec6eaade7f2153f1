//! Deterministic Uniswap V3 pool address derivation

use alloy::primitives::{b256, keccak256, Address, B256, U256};

use super::{PoolCandidate, PoolCandidates};
use crate::domain::fee_tier::FeeTier;
use crate::shared::errors::LongTailError;
use crate::shared::types::TokenIdentity;

/// keccak256 of the UniswapV3Pool creation code
pub const POOL_INIT_CODE_HASH: B256 =
    b256!("e34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

/// CREATE2 address of the pool for an already ordered pair.
///
/// salt = keccak256(abi.encode(token0, token1, uint24 fee))
pub fn compute_pool_address(
    factory: Address,
    token0: Address,
    token1: Address,
    fee_tier: FeeTier,
    init_code_hash: B256,
) -> Address {
    let mut encoded = [0u8; 96];
    encoded[..32].copy_from_slice(token0.into_word().as_slice());
    encoded[32..64].copy_from_slice(token1.into_word().as_slice());
    encoded[64..].copy_from_slice(B256::from(U256::from(fee_tier.as_u32())).as_slice());

    let salt = keccak256(encoded);
    factory.create2(salt.0, init_code_hash.0)
}

/// One candidate pool per fee tier for the pair, using the canonical Uniswap V3 init code
pub fn generate_pool_addresses(
    factory: Address,
    token_a: &TokenIdentity,
    token_b: &TokenIdentity,
) -> Result<PoolCandidates, LongTailError> {
    generate_pool_addresses_with_init_code_hash(factory, token_a, token_b, POOL_INIT_CODE_HASH)
}

/// Same as [`generate_pool_addresses`] for forks deployed with a different pool bytecode
pub fn generate_pool_addresses_with_init_code_hash(
    factory: Address,
    token_a: &TokenIdentity,
    token_b: &TokenIdentity,
    init_code_hash: B256,
) -> Result<PoolCandidates, LongTailError> {
    if token_a.chain_id != token_b.chain_id {
        return Err(LongTailError::ChainMismatch(token_a.chain_id, token_b.chain_id));
    }
    if token_a.address == token_b.address {
        return Err(LongTailError::IdenticalTokens(token_a.address));
    }

    let (token0, token1) = if token_a.sorts_before(token_b) {
        (token_a.address, token_b.address)
    } else {
        (token_b.address, token_a.address)
    };

    let mut candidates = PoolCandidates::with_capacity(FeeTier::ALL.len());
    for fee_tier in FeeTier::ALL {
        let address = compute_pool_address(factory, token0, token1, fee_tier, init_code_hash);
        candidates.insert(
            address,
            PoolCandidate {
                token0,
                token1,
                fee_tier,
            },
        );
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const FACTORY: Address = address!("1F98431c8aD98523631AE4a59f267346ea31F984");

    fn usdc() -> TokenIdentity {
        TokenIdentity::new(
            1,
            address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            6,
            "USDC",
            "USD Coin",
        )
    }

    fn weth() -> TokenIdentity {
        TokenIdentity::new(
            1,
            address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            18,
            "WETH",
            "Wrapped Ether",
        )
    }

    fn address_for(candidates: &PoolCandidates, fee_tier: FeeTier) -> Address {
        candidates
            .iter()
            .find(|(_, candidate)| candidate.fee_tier == fee_tier)
            .map(|(address, _)| *address)
            .unwrap()
    }

    #[test]
    fn test_matches_mainnet_pools() {
        let candidates = generate_pool_addresses(FACTORY, &weth(), &usdc()).unwrap();

        assert_eq!(
            address_for(&candidates, FeeTier::Low),
            address!("88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640")
        );
        assert_eq!(
            address_for(&candidates, FeeTier::Medium),
            address!("8ad599c3A0ff1De082011EFDDc58f1908eb6e6D8")
        );
    }

    #[test]
    fn test_one_candidate_per_fee_tier() {
        let candidates = generate_pool_addresses(FACTORY, &weth(), &usdc()).unwrap();

        assert_eq!(candidates.len(), FeeTier::ALL.len());
        let tiers: Vec<FeeTier> = candidates.iter().map(|(_, c)| c.fee_tier).collect();
        assert_eq!(tiers, FeeTier::ALL.to_vec());
    }

    #[test]
    fn test_candidates_are_canonically_ordered() {
        let candidates = generate_pool_addresses(FACTORY, &weth(), &usdc()).unwrap();

        for (_, candidate) in candidates.iter() {
            assert_eq!(candidate.token0, usdc().address);
            assert_eq!(candidate.token1, weth().address);
        }
    }

    #[test]
    fn test_generation_is_deterministic_and_symmetric() {
        let first = generate_pool_addresses(FACTORY, &weth(), &usdc()).unwrap();
        let second = generate_pool_addresses(FACTORY, &weth(), &usdc()).unwrap();
        let swapped = generate_pool_addresses(FACTORY, &usdc(), &weth()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, swapped);
    }

    #[test]
    fn test_init_code_hash_changes_addresses() {
        let canonical = generate_pool_addresses(FACTORY, &weth(), &usdc()).unwrap();
        let fork =
            generate_pool_addresses_with_init_code_hash(FACTORY, &weth(), &usdc(), B256::ZERO)
                .unwrap();

        assert_eq!(fork.len(), canonical.len());
        assert!(fork.addresses().all(|address| !canonical.contains(address)));
    }

    #[test]
    fn test_rejects_identical_tokens() {
        let result = generate_pool_addresses(FACTORY, &weth(), &weth());
        assert_eq!(result, Err(LongTailError::IdenticalTokens(weth().address)));
    }

    #[test]
    fn test_rejects_cross_chain_pair() {
        let mut bsc_usdc = usdc();
        bsc_usdc.chain_id = 56;

        let result = generate_pool_addresses(FACTORY, &weth(), &bsc_usdc);
        assert_eq!(result, Err(LongTailError::ChainMismatch(1, 56)));
    }
}
