// src/app.rs
use alloy::primitives::{Address, B256, U256};
use alloy::providers::ProviderBuilder;
use alloy::transports::http::reqwest::Url;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use longtail_router::application::{LongTailQuoteService, LongTailRoute, PoolDeployment};
use longtail_router::domain::pool::POOL_INIT_CODE_HASH;
use longtail_router::domain::token::ETH_CHAIN_ID;
use longtail_router::infrastructure::blockchain::EvmRpcClient;
use longtail_router::shared::types::TokenIdentity;
use longtail_router::shared::utils::{format_amount, shortfall_bps};

use crate::config::{Config, DEFAULT_FACTORY, DEFAULT_QUOTER};

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub rpc_url: String,
    pub chain_id: u64,
    pub factory: Address,
    pub quoter: Address,
    pub init_code_hash: B256,
    pub sell_token: TokenIdentity,
    pub buy_token: TokenIdentity,
    pub amount_in: U256,
    pub json: bool,
}

impl AppCfg {
    pub fn from_config(cfg: Config, json: bool) -> Result<Self> {
        let chain_id = cfg.chain.chain_id;
        // The default deployment only exists on Ethereum mainnet
        let (factory, quoter) = match (cfg.chain.factory, cfg.chain.quoter) {
            (Some(factory), Some(quoter)) => (factory, quoter),
            (factory, quoter) if chain_id == ETH_CHAIN_ID => (
                factory.unwrap_or(DEFAULT_FACTORY),
                quoter.unwrap_or(DEFAULT_QUOTER),
            ),
            _ => bail!(
                "chain {}: [chain] factory and quoter are required outside Ethereum mainnet",
                chain_id
            ),
        };

        Ok(Self {
            rpc_url: cfg.rpc.url,
            chain_id,
            factory,
            quoter,
            init_code_hash: cfg.chain.init_code_hash.unwrap_or(POOL_INIT_CODE_HASH),
            sell_token: cfg.tokens.sell.to_identity(chain_id)?,
            buy_token: cfg.tokens.buy.to_identity(chain_id)?,
            amount_in: cfg.trade.amount_in()?,
            json,
        })
    }

    pub fn from_cli_args(
        rpc_url: String,
        sell_token: TokenIdentity,
        buy_token: TokenIdentity,
        amount_in: U256,
        json: bool,
    ) -> Result<Self> {
        Ok(Self {
            rpc_url,
            chain_id: sell_token.chain_id,
            factory: DEFAULT_FACTORY,
            quoter: DEFAULT_QUOTER,
            init_code_hash: POOL_INIT_CODE_HASH,
            sell_token,
            buy_token,
            amount_in,
            json,
        })
    }
}

/// Machine-readable result printed with `--json`
#[derive(Debug, Serialize)]
struct QuoteReport<'a> {
    sell: &'a str,
    buy: &'a str,
    candidates: usize,
    live_pools: usize,
    quotes: Vec<PoolQuoteLine>,
    best: Option<&'a LongTailRoute>,
}

#[derive(Debug, Serialize)]
struct PoolQuoteLine {
    pool: Address,
    fee: String,
    amount_out: U256,
    shortfall_bps: u64,
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    info!("Starting long-tail quote for {} -> {}", app_cfg.sell_token.symbol, app_cfg.buy_token.symbol);

    let url: Url = app_cfg
        .rpc_url
        .parse()
        .with_context(|| format!("invalid rpc url {}", app_cfg.rpc_url))?;
    let provider = ProviderBuilder::new().connect_http(url);
    let client = Arc::new(EvmRpcClient::new(provider, app_cfg.quoter));
    info!("Factory: {}, quoter: {}", app_cfg.factory, client.quoter());

    match client.chain_id().await {
        Ok(chain_id) if chain_id != app_cfg.chain_id => {
            warn!("⚠️ Node reports chain {} but config says {}", chain_id, app_cfg.chain_id);
        }
        Ok(_) => {}
        Err(e) => {
            error!("❌ RPC endpoint unreachable: {}", e);
            return Err(e.into());
        }
    }

    let deployment = PoolDeployment {
        factory: app_cfg.factory,
        init_code_hash: app_cfg.init_code_hash,
    };
    let service = LongTailQuoteService::new(deployment, client.clone(), client);

    let round = service
        .quote_round(&app_cfg.sell_token, &app_cfg.buy_token, app_cfg.amount_in)
        .await?;

    let best_amount = round.best.as_ref().map(|route| route.amount_out).unwrap_or_default();
    let quotes: Vec<PoolQuoteLine> = round
        .quotes
        .iter()
        .map(|(pool, amount_out)| PoolQuoteLine {
            pool: *pool,
            fee: round
                .resolved
                .get(pool)
                .map(|p| p.fee_tier.to_string())
                .unwrap_or_default(),
            amount_out: *amount_out,
            shortfall_bps: shortfall_bps(best_amount, *amount_out),
        })
        .collect();

    if app_cfg.json {
        let report = QuoteReport {
            sell: &app_cfg.sell_token.symbol,
            buy: &app_cfg.buy_token.symbol,
            candidates: round.candidate_count,
            live_pools: round.resolved.len(),
            quotes,
            best: round.best.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let decimals = app_cfg.buy_token.decimals;
    for line in &quotes {
        println!(
            "  {} ({}) -> {} {} ({} bps below best)",
            line.pool,
            line.fee,
            format_amount(line.amount_out, decimals),
            app_cfg.buy_token.symbol,
            line.shortfall_bps
        );
    }

    match round.best {
        Some(route) => {
            println!(
                "Best: {} {} -> {} {} via pool {} ({}), aggregator {}",
                format_amount(route.amount_in, app_cfg.sell_token.decimals),
                app_cfg.sell_token.symbol,
                format_amount(route.amount_out, decimals),
                app_cfg.buy_token.symbol,
                route.pool_address,
                route.fee_tier,
                route.aggregator.address()
            );
        }
        None => println!("No route available"),
    }

    Ok(())
}
