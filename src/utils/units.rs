//! Exact conversion between decimal native-currency amounts and smallest units (wei).
//!
//! Amounts are parsed digit by digit into a `U256`, so any price with up to
//! 18 fractional digits converts without rounding.

use alloy_primitives::U256;
use std::fmt;

/// Fractional digits of the native currency
pub const ETHER_DECIMALS: usize = 18;

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    Empty,
    Negative,
    InvalidCharacter(char),
    MultipleDecimalPoints,
    TooManyDecimals { found: usize, max: usize },
    Overflow,
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::Empty => write!(f, "Amount is empty"),
            UnitError::Negative => write!(f, "Amount cannot be negative"),
            UnitError::InvalidCharacter(c) => write!(f, "Invalid character in amount: '{}'", c),
            UnitError::MultipleDecimalPoints => write!(f, "Amount has more than one decimal point"),
            UnitError::TooManyDecimals { found, max } => {
                write!(f, "Amount has {} fractional digits, at most {} supported", found, max)
            }
            UnitError::Overflow => write!(f, "Amount is too large"),
        }
    }
}

impl std::error::Error for UnitError {}

/// Parse a decimal string into an integer scaled by `10^decimals`
pub fn parse_units(amount: &str, decimals: usize) -> Result<U256, UnitError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitError::Empty);
    }
    if amount.starts_with('-') {
        return Err(UnitError::Negative);
    }

    let mut parts = amount.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(UnitError::MultipleDecimalPoints);
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(UnitError::Empty);
    }
    if let Some(c) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(UnitError::InvalidCharacter(c));
    }
    if fraction.len() > decimals {
        return Err(UnitError::TooManyDecimals {
            found: fraction.len(),
            max: decimals,
        });
    }

    let ten = U256::from(10u8);
    let mut value = U256::ZERO;
    for digit in whole.bytes().chain(fraction.bytes()) {
        value = value
            .checked_mul(ten)
            .and_then(|v| v.checked_add(U256::from(digit - b'0')))
            .ok_or(UnitError::Overflow)?;
    }
    for _ in fraction.len()..decimals {
        value = value.checked_mul(ten).ok_or(UnitError::Overflow)?;
    }

    Ok(value)
}

/// Parse an ETH amount into wei
pub fn parse_ether(amount: &str) -> Result<U256, UnitError> {
    parse_units(amount, ETHER_DECIMALS)
}

/// Encode a quantity the way JSON-RPC expects it (`0x`-prefixed, lowercase, no padding)
pub fn to_hex_quantity(value: U256) -> String {
    format!("{:#x}", value)
}

/// Render a scaled integer as a decimal string, trimming trailing zeros
pub fn format_units(value: U256, decimals: usize) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Render wei as ETH
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(n: u128) -> U256 {
        U256::from(n)
    }

    #[test]
    fn test_mint_price_is_exact() {
        let hex = to_hex_quantity(parse_ether("0.01").unwrap());
        assert_eq!(hex, "0x2386f26fc10000");
        assert_eq!(u128::from_str_radix(&hex[2..], 16).unwrap(), 10_000_000_000_000_000);
    }

    #[test]
    fn test_quantities_decode_back_to_total() {
        let price = parse_ether("0.01").unwrap();
        for quantity in 1..=10u32 {
            let total = price * U256::from(quantity);
            let hex = to_hex_quantity(total);
            let decoded = u128::from_str_radix(&hex[2..], 16).unwrap() as f64 / 1e18;
            assert!((decoded - 0.01 * quantity as f64).abs() < 1e-9, "quantity {}", quantity);
        }
    }

    #[test]
    fn test_parse_beyond_six_decimals() {
        // Prices finer than 10^-6 used to be truncated by float scaling
        assert_eq!(parse_ether("0.0000001").unwrap(), wei(100_000_000_000));
        assert_eq!(parse_ether("0.123456789").unwrap(), wei(123_456_789_000_000_000));
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), wei(1));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(parse_ether("1").unwrap(), wei(1_000_000_000_000_000_000));
        assert_eq!(parse_ether("1.").unwrap(), wei(1_000_000_000_000_000_000));
        assert_eq!(parse_ether(".5").unwrap(), wei(500_000_000_000_000_000));
        assert_eq!(parse_ether(" 2.5 ").unwrap(), wei(2_500_000_000_000_000_000));
        assert_eq!(parse_ether("0").unwrap(), U256::ZERO);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_ether(""), Err(UnitError::Empty));
        assert_eq!(parse_ether("."), Err(UnitError::Empty));
        assert_eq!(parse_ether("-0.01"), Err(UnitError::Negative));
        assert_eq!(parse_ether("+1"), Err(UnitError::InvalidCharacter('+')));
        assert_eq!(parse_ether("1e3"), Err(UnitError::InvalidCharacter('e')));
        assert_eq!(parse_ether("1.2.3"), Err(UnitError::MultipleDecimalPoints));
        assert_eq!(
            parse_ether("0.0000000000000000001"),
            Err(UnitError::TooManyDecimals { found: 19, max: 18 })
        );
        let huge = "9".repeat(80);
        assert_eq!(parse_ether(&huge), Err(UnitError::Overflow));
    }

    #[test]
    fn test_hex_quantity() {
        assert_eq!(to_hex_quantity(U256::ZERO), "0x0");
        assert_eq!(to_hex_quantity(wei(255)), "0xff");
    }

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(wei(30_000_000_000_000_000)), "0.03");
        assert_eq!(format_ether(wei(100_000_000_000_000_000)), "0.1");
        assert_eq!(format_ether(wei(1_000_000_000_000_000_000)), "1");
        assert_eq!(format_ether(wei(12_500_000_000_000_000_000)), "12.5");
        assert_eq!(format_ether(wei(1)), "0.000000000000000001");
        assert_eq!(format_ether(U256::ZERO), "0");
    }

    #[test]
    fn test_format_units_small_decimals() {
        assert_eq!(format_units(wei(1234), 2), "12.34");
        assert_eq!(format_units(wei(5), 0), "5");
    }
}
