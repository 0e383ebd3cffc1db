//! Conversions between hex-encoded wei quantities and ether amounts.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::{BALANCE_DISPLAY_DECIMALS, WEI_PER_ETHER};
use crate::errors::{ProviderError, Result, ValidationError};
use crate::Error;

/// Parses a `0x`-prefixed hex quantity as returned by JSON-RPC nodes.
pub fn parse_hex_quantity(value: &str) -> std::result::Result<u128, ProviderError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() {
        return Ok(0);
    }
    u128::from_str_radix(digits, 16)
        .map_err(|e| ProviderError::InvalidResponse(format!("bad hex quantity '{}': {}", value, e)))
}

/// Formats a wei amount as ether with four decimals, rounding half up.
pub fn format_wei_as_ether(wei: u128) -> String {
    let scale = 10u128.pow(18 - BALANCE_DISPLAY_DECIMALS);
    let units = 10u128.pow(BALANCE_DISPLAY_DECIMALS);
    let mut whole = wei / WEI_PER_ETHER;
    let mut frac = (wei % WEI_PER_ETHER + scale / 2) / scale;
    if frac >= units {
        whole += 1;
        frac -= units;
    }
    format!(
        "{}.{:0width$}",
        whole,
        frac,
        width = BALANCE_DISPLAY_DECIMALS as usize
    )
}

/// Converts a decimal ether amount into a `0x` hex wei quantity.
pub fn ether_to_hex_wei(amount: &str) -> Result<String> {
    let ether: Decimal = amount.trim().parse().map_err(ValidationError::DecimalParse)?;
    if ether <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Transaction value must be positive".to_string(),
        )));
    }
    let wei = ether
        .checked_mul(Decimal::from(WEI_PER_ETHER as u64))
        .map(|v| v.trunc())
        .and_then(|v| v.to_u128())
        .ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Transaction value '{}' is out of range",
                amount
            )))
        })?;
    Ok(format!("0x{:x}", wei))
}
