mod app;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use longtail_router::domain::token::{token_from_asset_id, ETH_CHAIN_ID};

#[derive(Parser, Debug)]
#[command(version, about = "Best-rate Uniswap V3 pool finder for long-tail EVM swaps")]
struct Args {
    /// RPC endpoint URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Sell token as CAIP-19 asset id, e.g. eip155:1/erc20:0x...
    #[arg(long)]
    sell_asset: Option<String>,

    /// Sell token symbol
    #[arg(long, default_value = "SELL")]
    sell_symbol: String,

    /// Sell token decimals
    #[arg(long, default_value = "18")]
    sell_decimals: u8,

    /// Buy token as CAIP-19 asset id
    #[arg(long)]
    buy_asset: Option<String>,

    /// Buy token symbol
    #[arg(long, default_value = "BUY")]
    buy_symbol: String,

    /// Buy token decimals
    #[arg(long, default_value = "18")]
    buy_decimals: u8,

    /// Amount to sell in base units
    #[arg(long)]
    amount_in: Option<String>,

    /// Uniswap V3 factory address (overrides config)
    #[arg(long)]
    factory: Option<String>,

    /// Quoter contract address (overrides config)
    #[arg(long)]
    quoter: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let sell_token = args
        .sell_asset
        .as_deref()
        .map(|id| token_from_asset_id(id, &args.sell_symbol, &args.sell_symbol, args.sell_decimals))
        .transpose()?;
    let buy_token = args
        .buy_asset
        .as_deref()
        .map(|id| token_from_asset_id(id, &args.buy_symbol, &args.buy_symbol, args.buy_decimals))
        .transpose()?;
    let amount_in = args.amount_in.as_deref().map(config::parse_amount).transpose()?;

    // Priority: CLI args > Config file > Defaults
    let mut app_cfg = if let Some(config_path) = &args.config {
        let cfg = config::Config::from_file(config_path)?;
        let mut app_cfg = app::AppCfg::from_config(cfg, args.json)?;

        if let Some(rpc_url) = args.rpc_url {
            app_cfg.rpc_url = rpc_url;
        }
        if let Some(sell_token) = sell_token {
            app_cfg.sell_token = sell_token;
        }
        if let Some(buy_token) = buy_token {
            app_cfg.buy_token = buy_token;
        }
        if let Some(amount_in) = amount_in {
            app_cfg.amount_in = amount_in;
        }

        app_cfg
    } else {
        let rpc_url = args.rpc_url.ok_or_else(|| anyhow::anyhow!("--rpc-url is required when not using --config"))?;
        let sell_token = sell_token.ok_or_else(|| anyhow::anyhow!("--sell-asset is required when not using --config"))?;
        let buy_token = buy_token.ok_or_else(|| anyhow::anyhow!("--buy-asset is required when not using --config"))?;
        let amount_in = amount_in.ok_or_else(|| anyhow::anyhow!("--amount-in is required when not using --config"))?;

        if sell_token.chain_id != ETH_CHAIN_ID && (args.factory.is_none() || args.quoter.is_none()) {
            anyhow::bail!("--factory and --quoter are required outside Ethereum mainnet");
        }

        app::AppCfg::from_cli_args(rpc_url, sell_token, buy_token, amount_in, args.json)?
    };

    if let Some(factory) = args.factory {
        app_cfg.factory = factory.parse()?;
    }
    if let Some(quoter) = args.quoter {
        app_cfg.quoter = quoter.parse()?;
    }

    app::run(app_cfg).await
}
