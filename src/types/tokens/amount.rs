// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::ops::Add;

use super::decimals::TokenDecimals;
use crate::amount::{format_scaled, scale_down, to_raw};
use crate::errors::AmountError;

/// Raw token amount as stored on-chain (not scaled by decimals)
///
/// This represents the amount in the token's smallest unit (e.g., wei for
/// ETH, satoshis for WBTC). To get the human-readable amount, use
/// [`to_display`](Self::to_display) with the token's [`TokenDecimals`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use evm_chain_config::{TokenAmount, TokenDecimals};
/// use std::str::FromStr;
///
/// // 1.5 ETH in wei (18 decimals)
/// let amount = TokenAmount::new(U256::from(1_500_000_000_000_000_000u64));
/// let display = amount.to_display(TokenDecimals::STANDARD);
/// assert_eq!(display, BigDecimal::from_str("1.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact display amount: amount / 10^decimals
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use bigdecimal::BigDecimal;
    /// use evm_chain_config::{TokenAmount, TokenDecimals};
    /// use std::str::FromStr;
    ///
    /// // 100 USDC (6 decimals)
    /// let raw = TokenAmount::new(U256::from(100_000_000u64));
    /// assert_eq!(raw.to_display(TokenDecimals::USDC), BigDecimal::from_str("100").unwrap());
    /// ```
    pub fn to_display(&self, decimals: TokenDecimals) -> BigDecimal {
        scale_down(decimals, &u256_to_bigint(self.0))
    }

    /// Raw amount for a display amount: display * 10^decimals
    ///
    /// # Errors
    ///
    /// - [`AmountError::InvalidAmount`] if `display` is negative
    /// - [`AmountError::Overflow`] if the raw amount does not fit in 256 bits
    pub fn from_display(
        decimals: TokenDecimals,
        display: &BigDecimal,
    ) -> Result<Self, AmountError> {
        let raw = to_raw(decimals, display)?;
        bigint_to_u256(&raw).map(Self)
    }

    /// Display string without trailing zeros, e.g. `"1.5"` for 1.5 ETH
    pub fn format(&self, decimals: TokenDecimals) -> String {
        format_scaled(decimals, &u256_to_bigint(self.0))
    }
}

/// Convert an on-chain U256 into an arbitrary-precision integer
pub fn u256_to_bigint(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>())
}

/// Convert an arbitrary-precision integer into a U256
///
/// # Errors
///
/// - [`AmountError::InvalidAmount`] if `value` is negative
/// - [`AmountError::Overflow`] if `value` needs more than 256 bits
pub fn bigint_to_u256(value: &BigInt) -> Result<U256, AmountError> {
    let (sign, bytes) = value.to_bytes_be();
    if sign == Sign::Minus {
        return Err(AmountError::invalid_amount(value));
    }

    U256::try_from_be_slice(&bytes).ok_or_else(|| AmountError::overflow(value))
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
