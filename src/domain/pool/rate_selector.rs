//! Best rate selection across quoted pools

use super::{BestRate, QuoteResult};

/// Pool with the strictly greatest quote; on ties the earlier entry wins.
/// `None` means no pool could be quoted.
pub fn select_best_rate(quotes: &QuoteResult) -> Option<BestRate> {
    quotes
        .iter()
        .fold(None, |best: Option<BestRate>, (address, amount)| match best {
            Some(current) if *amount <= current.amount_out => Some(current),
            _ => Some(BestRate {
                pool_address: *address,
                amount_out: *amount,
            }),
        })
}
