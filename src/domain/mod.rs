//! Domain layer - core routing logic and entities

pub mod chain;
pub mod fee_tier;
pub mod pool;
pub mod token;
pub mod trade_type;
