//! Common types used across the application

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Chain-scoped ERC-20 token reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl TokenIdentity {
    pub fn new(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// True when this token is token0 of a pool paired with `other`.
    ///
    /// Byte order of the address equals the lowercase hex order used by the
    /// pool factory.
    pub fn sorts_before(&self, other: &TokenIdentity) -> bool {
        self.address.cmp(&other.address) == Ordering::Less
    }
}
