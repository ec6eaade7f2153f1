//! Utility functions and helpers

use alloy::primitives::U256;

/// Format a base-unit amount with the token's decimals, trailing zeros trimmed
pub fn format_amount(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Relative difference of `other` against `best`, in basis points
pub fn shortfall_bps(best: U256, other: U256) -> u64 {
    if best.is_zero() || other >= best {
        return 0;
    }
    let diff = best - other;
    let bps = diff.saturating_mul(U256::from(10_000u64)) / best;
    bps.try_into().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(U256::from(1_800_000_000u64), 6), "1800");
        assert_eq!(format_amount(U256::from(1_234_500u64), 6), "1.2345");
        assert_eq!(format_amount(U256::from(5u64), 6), "0.000005");
        assert_eq!(format_amount(U256::from(42u64), 0), "42");
        assert_eq!(format_amount(U256::ZERO, 18), "0");
    }

    #[test]
    fn test_shortfall_bps() {
        let best = U256::from(1_800_000_000u64);
        assert_eq!(shortfall_bps(best, U256::from(1_795_000_000u64)), 27);
        assert_eq!(shortfall_bps(best, best), 0);
        assert_eq!(shortfall_bps(U256::ZERO, U256::from(1u64)), 0);
    }
}
