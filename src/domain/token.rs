//! Token lookups: wrapped native assets and CAIP-19 asset ids

use alloy::primitives::{address, Address};
use std::str::FromStr;

use crate::shared::errors::LongTailError;
use crate::shared::types::TokenIdentity;

pub const ETH_CHAIN_ID: u64 = 1;
pub const BSC_CHAIN_ID: u64 = 56;
pub const AVALANCHE_CHAIN_ID: u64 = 43114;

const EVM_NAMESPACE: &str = "eip155";
const TOKEN_NAMESPACES: [&str; 2] = ["erc20", "bep20"];

/// Wrapped native token used as the long-tail pool counterpart on a chain
pub fn wrapped_native_token(chain_id: u64) -> Result<TokenIdentity, LongTailError> {
    match chain_id {
        ETH_CHAIN_ID => Ok(TokenIdentity::new(
            ETH_CHAIN_ID,
            address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            18,
            "WETH",
            "Wrapped Ether",
        )),
        BSC_CHAIN_ID => Ok(TokenIdentity::new(
            BSC_CHAIN_ID,
            address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
            18,
            "WBNB",
            "Wrapped BNB",
        )),
        AVALANCHE_CHAIN_ID => Ok(TokenIdentity::new(
            AVALANCHE_CHAIN_ID,
            address!("B31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
            18,
            "WAVAX",
            "Wrapped AVAX",
        )),
        other => Err(LongTailError::UnsupportedChain(other)),
    }
}

/// Build a token from a CAIP-19 id such as `eip155:1/erc20:0xa0b8...eb48`
pub fn token_from_asset_id(
    asset_id: &str,
    symbol: &str,
    name: &str,
    precision: u8,
) -> Result<TokenIdentity, LongTailError> {
    let invalid = || LongTailError::InvalidAssetId(asset_id.to_string());

    let (chain_part, asset_part) = asset_id.split_once('/').ok_or_else(invalid)?;
    let (namespace, chain_reference) = chain_part.split_once(':').ok_or_else(invalid)?;
    let (asset_namespace, asset_reference) = asset_part.split_once(':').ok_or_else(invalid)?;

    if namespace != EVM_NAMESPACE || !TOKEN_NAMESPACES.contains(&asset_namespace) {
        return Err(invalid());
    }

    let chain_id = chain_reference.parse::<u64>().map_err(|_| invalid())?;
    let address = Address::from_str(asset_reference).map_err(|_| invalid())?;

    Ok(TokenIdentity::new(chain_id, address, precision, symbol, name))
}
