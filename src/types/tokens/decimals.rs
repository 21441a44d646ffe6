// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Token decimal precision
///
/// Represents the number of fractional digits separating a token's smallest
/// unit from its display unit. Most ERC-20 tokens use 18 decimals (like ETH),
/// but some use different values:
/// - USDC / USDT: 6 decimals
/// - WBTC: 8 decimals
/// - Standard: 18 decimals
///
/// The converter accepts any value; [`is_reasonable`](Self::is_reasonable)
/// reports whether a value falls into the range seen in practice.
///
/// # Examples
///
/// ```
/// use evm_chain_config::TokenDecimals;
///
/// let eth_decimals = TokenDecimals::STANDARD;
/// assert_eq!(eth_decimals.as_u8(), 18);
///
/// let usdc_decimals = TokenDecimals::USDC;
/// assert_eq!(usdc_decimals.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Largest decimals count seen in practice
    pub const MAX_REASONABLE: u8 = 36;

    /// Integer passthrough (0)
    pub const ZERO: Self = Self(0);

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check if decimals are in the practical range (0-36)
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }

    /// Exact scale factor `10^decimals`
    ///
    /// # Examples
    ///
    /// ```
    /// use evm_chain_config::TokenDecimals;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(TokenDecimals::USDC.scale(), BigInt::from(1_000_000u64));
    /// ```
    pub fn scale(&self) -> BigInt {
        BigInt::from(10u8).pow(u32::from(self.0))
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
