// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token amount conversion.
//!
//! This module provides error types for operations in the `amount` module,
//! converting between raw on-chain amounts and human-readable decimal amounts.

/// Errors that can occur while converting token amounts.
///
/// Conversions are deterministic, so none of these errors are transient.
/// They always indicate bad input from the caller.
///
/// # Examples
///
/// ```rust
/// use evm_chain_config::{to_display, AmountError, TokenDecimals};
/// use num_bigint::BigInt;
///
/// match to_display(TokenDecimals::STANDARD, &BigInt::from(-1)) {
///     Err(AmountError::InvalidAmount { value }) => assert_eq!(value, "-1"),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// A negative raw or display amount was supplied.
    #[error("Invalid amount {value}: amounts must not be negative")]
    InvalidAmount {
        /// The rejected amount, as a decimal string
        value: String,
    },

    /// The raw amount does not fit in 256 bits.
    ///
    /// Only returned by conversions targeting [`alloy_primitives::U256`].
    #[error("Amount {value} does not fit in 256 bits")]
    Overflow {
        /// The raw amount that overflowed, as a decimal string
        value: String,
    },
}

impl AmountError {
    /// Create an `InvalidAmount` error for the rejected value.
    pub fn invalid_amount(value: impl std::fmt::Display) -> Self {
        AmountError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create an `Overflow` error for the value that did not fit.
    pub fn overflow(value: impl std::fmt::Display) -> Self {
        AmountError::Overflow {
            value: value.to_string(),
        }
    }
}
