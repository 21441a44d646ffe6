// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversion between raw token amounts and human-readable amounts
//!
//! Raw amounts are token balances in their smallest unit (wei for ETH) held as
//! arbitrary-precision integers. Display amounts are the same balances scaled
//! by `10^-decimals`, held as [`BigDecimal`]. No binary floating point is used
//! anywhere, so a value such as `1.000000000000000001` survives intact and
//! `to_raw(d, to_display(d, raw)?)? == raw` holds for every non-negative `raw`.
//!
//! # Examples
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use evm_chain_config::{to_display, to_raw, TokenDecimals};
//! use num_bigint::BigInt;
//! use std::str::FromStr;
//!
//! let wei = BigInt::from(1_000_000_000_000_000_001u128);
//! let eth = to_display(TokenDecimals::STANDARD, &wei).unwrap();
//! assert_eq!(eth, BigDecimal::from_str("1.000000000000000001").unwrap());
//! assert_eq!(to_raw(TokenDecimals::STANDARD, &eth).unwrap(), wei);
//! ```

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::errors::AmountError;
use crate::types::tokens::TokenDecimals;

/// Convert a raw amount (smallest unit) to its display amount.
///
/// The raw amount is split into `raw div 10^decimals` and `raw mod 10^decimals`
/// with integer arithmetic, and the remainder is placed behind the decimal point
/// without any division, so the result is always exact.
///
/// # Errors
///
/// Returns [`AmountError::InvalidAmount`] if `raw` is negative.
pub fn to_display(decimals: TokenDecimals, raw: &BigInt) -> Result<BigDecimal, AmountError> {
    if raw.is_zero() {
        return Ok(BigDecimal::zero());
    }

    if raw.sign() == Sign::Minus {
        return Err(AmountError::invalid_amount(raw));
    }

    Ok(scale_down(decimals, raw))
}

/// `raw * 10^-decimals`, split into integer and fractional parts
pub(crate) fn scale_down(decimals: TokenDecimals, raw: &BigInt) -> BigDecimal {
    let scale = decimals.scale();
    let entier = raw / &scale;
    let tail = raw % &scale;

    BigDecimal::new(entier, 0) + BigDecimal::new(tail, i64::from(decimals.as_u8()))
}

/// Convert a display amount back to a raw amount (smallest unit).
///
/// The integer part is scaled exactly. The fractional part is multiplied by
/// `10^decimals` in decimal arithmetic and rounded half-up, which only matters
/// when `display` carries more fractional digits than `decimals`.
///
/// # Errors
///
/// Returns [`AmountError::InvalidAmount`] if `display` is negative.
pub fn to_raw(decimals: TokenDecimals, display: &BigDecimal) -> Result<BigInt, AmountError> {
    if display.is_zero() {
        return Ok(BigInt::zero());
    }

    if display.sign() == Sign::Minus {
        return Err(AmountError::invalid_amount(display));
    }

    let scale = decimals.scale();

    // Truncation toward zero, which is the floor for non-negative input
    let entier = display.with_scale(0);
    let tail = display - &entier;

    let scaled_tail =
        (tail * BigDecimal::new(scale.clone(), 0)).with_scale_round(0, RoundingMode::HalfUp);

    let (entier_digits, _) = entier.into_bigint_and_exponent();
    let (tail_digits, _) = scaled_tail.into_bigint_and_exponent();

    Ok(entier_digits * scale + tail_digits)
}

/// Convert a wei amount already held as a decimal to its display amount.
///
/// Equivalent to [`to_display`] for integral input; fractional wei are kept
/// and shifted along with the rest of the value.
///
/// # Errors
///
/// Returns [`AmountError::InvalidAmount`] if `wei` is negative.
pub fn decimal_wei_to_display(
    decimals: TokenDecimals,
    wei: &BigDecimal,
) -> Result<BigDecimal, AmountError> {
    if wei.is_zero() {
        return Ok(BigDecimal::zero());
    }

    if wei.sign() == Sign::Minus {
        return Err(AmountError::invalid_amount(wei));
    }

    Ok(wei * &BigDecimal::new(BigInt::from(1u8), i64::from(decimals.as_u8())))
}

/// Format a raw amount as a display string without trailing zeros.
///
/// `1_500_000` with 6 decimals formats as `"1.5"`, and whole amounts carry no
/// decimal point at all.
///
/// # Errors
///
/// Returns [`AmountError::InvalidAmount`] if `raw` is negative.
pub fn format_units(decimals: TokenDecimals, raw: &BigInt) -> Result<String, AmountError> {
    if raw.sign() == Sign::Minus {
        return Err(AmountError::invalid_amount(raw));
    }

    Ok(format_scaled(decimals, raw))
}

pub(crate) fn format_scaled(decimals: TokenDecimals, raw: &BigInt) -> String {
    let width = usize::from(decimals.as_u8());
    if width == 0 {
        return raw.to_string();
    }

    let scale = decimals.scale();
    let whole = raw / &scale;
    let fractional = raw % &scale;

    let fractional_str = format!("{:0width$}", fractional, width = width);
    let trimmed = fractional_str.trim_end_matches('0');

    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, trimmed)
    }
}
