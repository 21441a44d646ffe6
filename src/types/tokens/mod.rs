// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! ```text
//! TokenAmount (U256, raw)
//!     |
//!     | to_display(TokenDecimals)
//!     ↓
//! BigDecimal (exact, human-readable)
//! ```

mod amount;
mod decimals;

pub use amount::{bigint_to_u256, u256_to_bigint, TokenAmount};
pub use decimals::TokenDecimals;
