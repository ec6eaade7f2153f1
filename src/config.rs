use alloy::primitives::{address, Address, B256, U256};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr};

use longtail_router::domain::token::token_from_asset_id;
use longtail_router::shared::types::TokenIdentity;

/// Uniswap V3 factory on Ethereum mainnet
pub const DEFAULT_FACTORY: Address = address!("1F98431c8aD98523631AE4a59f267346ea31F984");

/// Uniswap V3 Quoter (V1) on Ethereum mainnet
pub const DEFAULT_QUOTER: Address = address!("b27308f9F90D607463bb33eA1BeBb41C27CE5AB6");

#[derive(Debug, Clone, Deserialize)]
pub struct RpcCfg {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainCfg {
    pub chain_id: u64,
    pub factory: Option<Address>,
    pub quoter: Option<Address>,
    pub init_code_hash: Option<B256>,
}

/// A token given either by CAIP-19 asset id or by address on the configured chain
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    pub asset_id: Option<String>,
    pub address: Option<Address>,
    pub symbol: String,
    pub decimals: u8,
    pub name: Option<String>,
}

impl TokenInfo {
    pub fn to_identity(&self, chain_id: u64) -> Result<TokenIdentity> {
        let name = self.name.clone().unwrap_or_else(|| self.symbol.clone());
        match (&self.asset_id, self.address) {
            (Some(asset_id), _) => {
                token_from_asset_id(asset_id, &self.symbol, &name, self.decimals)
                    .with_context(|| format!("token {}", self.symbol))
            }
            (None, Some(address)) => Ok(TokenIdentity::new(
                chain_id,
                address,
                self.decimals,
                &self.symbol,
                name,
            )),
            (None, None) => Err(anyhow!(
                "token {} needs either asset_id or address",
                self.symbol
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenCfg {
    pub sell: TokenInfo,
    pub buy: TokenInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TradeCfg {
    /// Sell amount in base units, decimal or 0x-prefixed
    pub amount_in: String,
}

impl TradeCfg {
    pub fn amount_in(&self) -> Result<U256> {
        parse_amount(&self.amount_in)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub rpc: RpcCfg,
    pub chain: ChainCfg,
    pub tokens: TokenCfg,
    pub trade: TradeCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).context("parse Config.toml")?;
        Ok(cfg)
    }
}

pub fn parse_amount(raw: &str) -> Result<U256> {
    U256::from_str(raw.trim()).map_err(|e| anyhow!("invalid amount {:?}: {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [rpc]
        url = "http://localhost:8545"

        [chain]
        chain_id = 1
        quoter = "0xb27308f9F90D607463bb33eA1BeBb41C27CE5AB6"

        [tokens.sell]
        address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        symbol = "WETH"
        decimals = 18

        [tokens.buy]
        asset_id = "eip155:1/erc20:0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
        symbol = "USDC"
        decimals = 6
        name = "USD Coin"

        [trade]
        amount_in = "1000000000000000000"
    "#;

    #[test]
    fn test_parse_config() {
        let cfg = Config::from_toml(SAMPLE).unwrap();

        assert_eq!(cfg.rpc.url, "http://localhost:8545");
        assert_eq!(cfg.chain.chain_id, 1);
        assert_eq!(cfg.chain.factory, None);
        assert_eq!(cfg.chain.quoter, Some(DEFAULT_QUOTER));
        assert_eq!(
            cfg.trade.amount_in().unwrap(),
            U256::from(1_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_token_identity_from_address_and_asset_id() {
        let cfg = Config::from_toml(SAMPLE).unwrap();

        let sell = cfg.tokens.sell.to_identity(cfg.chain.chain_id).unwrap();
        assert_eq!(sell.symbol, "WETH");
        assert_eq!(sell.name, "WETH");
        assert_eq!(sell.chain_id, 1);

        let buy = cfg.tokens.buy.to_identity(cfg.chain.chain_id).unwrap();
        assert_eq!(buy.address, address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"));
        assert_eq!(buy.decimals, 6);
    }

    #[test]
    fn test_token_without_location_is_rejected() {
        let info = TokenInfo {
            asset_id: None,
            address: None,
            symbol: "FOX".to_string(),
            decimals: 18,
            name: None,
        };
        assert!(info.to_identity(1).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0x10").unwrap(), U256::from(16u64));
        assert_eq!(parse_amount(" 42 ").unwrap(), U256::from(42u64));
        assert!(parse_amount("1.5").is_err());
    }
}
