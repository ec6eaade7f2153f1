//! Application layer - use cases and services

pub mod long_tail_quote;

pub use long_tail_quote::{LongTailQuoteService, LongTailRoute, PoolDeployment, QuoteRound};
