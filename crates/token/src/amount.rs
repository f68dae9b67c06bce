//! Decimal amount parsing.
//!
//! Amounts arrive as decimal strings in whole-token units and are scaled to
//! the token's smallest unit (18 decimals). The strict pattern gate runs
//! before any numeric conversion, so malformed input never reaches the
//! network, and a fractional part finer than 18 decimal places is rejected
//! rather than truncated.

use crate::TokenError;
use alloy_primitives::{utils::parse_units, U256};

/// Token decimals. The deployed contract uses the ERC20 default.
pub const DECIMALS: u8 = 18;

/// Check the strict decimal pattern `^\d+(\.\d+)?$`.
pub fn is_decimal_string(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac {
        None => true,
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
    }
}

/// Parse a whole-token decimal string into smallest units.
///
/// Rejects anything outside the strict decimal pattern, amounts that do not
/// fit the token's 18 decimal places, and zero.
pub fn parse_amount(raw: &str) -> Result<U256, TokenError> {
    let value = raw.trim();
    if !is_decimal_string(value) {
        return Err(TokenError::InvalidAmount(format!(
            "not a decimal string: {value:?}"
        )));
    }

    let units: U256 = parse_units(value, DECIMALS)
        .map_err(|e| TokenError::InvalidAmount(e.to_string()))?
        .get_absolute();

    if units.is_zero() {
        return Err(TokenError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }

    Ok(units)
}
