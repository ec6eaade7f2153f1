//! Classification of a swap by which sides have a native THORChain pool

use serde::{Deserialize, Serialize};

/// Pool id of RUNE, which needs no pool of its own to be L1
pub const RUNE_POOL_ID: &str = "THOR.RUNE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    LongTailToLongTail,
    LongTailToL1,
    L1ToLongTail,
    L1ToL1,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::LongTailToLongTail => "LongTailToLongTail",
            TradeType::LongTailToL1 => "LongTailToL1",
            TradeType::L1ToLongTail => "L1ToLongTail",
            TradeType::L1ToL1 => "L1ToL1",
        }
    }

    /// Whether the sell side must first be routed through an AMM pool
    pub fn sells_long_tail(&self) -> bool {
        matches!(self, TradeType::LongTailToLongTail | TradeType::LongTailToL1)
    }

    /// Whether the buy side must be routed through an AMM pool
    pub fn buys_long_tail(&self) -> bool {
        matches!(self, TradeType::LongTailToLongTail | TradeType::L1ToLongTail)
    }
}

/// Classify a trade from the presence of each side's pool.
///
/// A side without a pool still counts as L1 when it is RUNE itself.
pub fn classify_trade(
    has_sell_pool: bool,
    has_buy_pool: bool,
    sell_pool_id: Option<&str>,
    buy_pool_id: Option<&str>,
) -> Option<TradeType> {
    let sell_is_rune = sell_pool_id == Some(RUNE_POOL_ID);
    let buy_is_rune = buy_pool_id == Some(RUNE_POOL_ID);

    match (has_sell_pool, has_buy_pool) {
        (true, true) => Some(TradeType::L1ToL1),
        (false, true) if sell_is_rune => Some(TradeType::L1ToL1),
        (true, false) if buy_is_rune => Some(TradeType::L1ToL1),
        (false, false) => Some(TradeType::LongTailToLongTail),
        (false, true) => Some(TradeType::LongTailToL1),
        (true, false) => Some(TradeType::L1ToLongTail),
    }
}
