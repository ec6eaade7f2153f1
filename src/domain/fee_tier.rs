//! Uniswap V3 fee tiers and the aggregator contracts that route through them

use alloy::primitives::{address, aliases::U24, Address};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::LongTailError;

/// Fee tiers in hundredths of a basis point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeeTier {
    Lowest,
    Low,
    Medium,
    High,
}

impl FeeTier {
    /// All tiers, lowest fee first. Candidate and quote ordering follows this.
    pub const ALL: [FeeTier; 4] = [FeeTier::Lowest, FeeTier::Low, FeeTier::Medium, FeeTier::High];

    pub fn as_u32(&self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    pub fn as_u24(&self) -> U24 {
        U24::from(self.as_u32())
    }

    pub fn from_u32(fee: u32) -> Result<Self, LongTailError> {
        match fee {
            100 => Ok(FeeTier::Lowest),
            500 => Ok(FeeTier::Low),
            3000 => Ok(FeeTier::Medium),
            10000 => Ok(FeeTier::High),
            other => Err(LongTailError::UnknownFeeTier(other)),
        }
    }

    /// Aggregator contract used to route a trade through a pool of this tier
    pub fn aggregator(&self) -> AggregatorContract {
        match self {
            FeeTier::Lowest => AggregatorContract::TsAggregatorUniswapV3_100,
            FeeTier::Low => AggregatorContract::TsAggregatorUniswapV3_500,
            FeeTier::Medium => AggregatorContract::TsAggregatorUniswapV3_3000,
            FeeTier::High => AggregatorContract::TsAggregatorUniswapV3_10000,
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fee = self.as_u32();
        write!(f, "{}.{:02}%", fee / 10_000, (fee % 10_000) / 100)
    }
}

/// Whitelisted THORSwap Uniswap V3 aggregators, one per fee tier
// TODO: fetch the whitelist from thornode, it can change without a release
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregatorContract {
    TsAggregatorUniswapV3_100,
    TsAggregatorUniswapV3_500,
    TsAggregatorUniswapV3_3000,
    TsAggregatorUniswapV3_10000,
}

impl AggregatorContract {
    pub const ALL: [AggregatorContract; 4] = [
        AggregatorContract::TsAggregatorUniswapV3_100,
        AggregatorContract::TsAggregatorUniswapV3_500,
        AggregatorContract::TsAggregatorUniswapV3_3000,
        AggregatorContract::TsAggregatorUniswapV3_10000,
    ];

    pub fn address(&self) -> Address {
        match self {
            AggregatorContract::TsAggregatorUniswapV3_100 => {
                address!("bd68cbe6c247e2c3a0e36b8f0e24964914f26ee8")
            }
            AggregatorContract::TsAggregatorUniswapV3_500 => {
                address!("e4ddca21881bac219af7f217703db0475d2a9f02")
            }
            AggregatorContract::TsAggregatorUniswapV3_3000 => {
                address!("11733abf0cdb43298f7e949c930188451a9a9ef2")
            }
            AggregatorContract::TsAggregatorUniswapV3_10000 => {
                address!("b33874810e5395eb49d8bd7e912631db115d5a03")
            }
        }
    }

    pub fn fee_tier(&self) -> FeeTier {
        match self {
            AggregatorContract::TsAggregatorUniswapV3_100 => FeeTier::Lowest,
            AggregatorContract::TsAggregatorUniswapV3_500 => FeeTier::Low,
            AggregatorContract::TsAggregatorUniswapV3_3000 => FeeTier::Medium,
            AggregatorContract::TsAggregatorUniswapV3_10000 => FeeTier::High,
        }
    }

    pub fn from_address(address: Address) -> Result<Self, LongTailError> {
        Self::ALL
            .into_iter()
            .find(|contract| contract.address() == address)
            .ok_or(LongTailError::UnknownAggregator(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_tier_values() {
        let fees: Vec<u32> = FeeTier::ALL.iter().map(FeeTier::as_u32).collect();
        assert_eq!(fees, vec![100, 500, 3000, 10000]);
        assert_eq!(FeeTier::from_u32(3000).unwrap(), FeeTier::Medium);
        assert_eq!(FeeTier::from_u32(2500), Err(LongTailError::UnknownFeeTier(2500)));
    }

    #[test]
    fn test_fee_tier_display() {
        assert_eq!(FeeTier::Lowest.to_string(), "0.01%");
        assert_eq!(FeeTier::Low.to_string(), "0.05%");
        assert_eq!(FeeTier::Medium.to_string(), "0.30%");
        assert_eq!(FeeTier::High.to_string(), "1.00%");
    }

    #[test]
    fn test_aggregator_mapping_is_bidirectional() {
        for tier in FeeTier::ALL {
            let contract = tier.aggregator();
            assert_eq!(contract.fee_tier(), tier);
            assert_eq!(AggregatorContract::from_address(contract.address()).unwrap(), contract);
        }
    }

    #[test]
    fn test_unknown_aggregator_address() {
        assert_eq!(
            AggregatorContract::from_address(Address::ZERO),
            Err(LongTailError::UnknownAggregator(Address::ZERO))
        );
    }
}
