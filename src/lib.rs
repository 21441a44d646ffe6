// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain configuration, exact token amount conversion and block explorer links
//! for EVM chains.
//!
//! - [`to_display`] / [`to_raw`] convert between raw on-chain integers (wei)
//!   and display decimals without ever touching floating point
//! - [`ExplorerUrl`] builds transaction, address, block, token and balance
//!   links from a chain's explorer template
//! - [`ChainConfigStore`] parses the `netId<N>`-keyed configuration document
//!
//! # Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use evm_chain_config::{ChainConfigStore, ETHEREUM_ID};
//! use num_bigint::BigInt;
//!
//! let store = ChainConfigStore::bundled().unwrap();
//! let ethereum = store.chain(ETHEREUM_ID).unwrap();
//!
//! let display = ethereum
//!     .display_amount("eth", &BigInt::from(1_500_000_000_000_000_000u128))
//!     .unwrap();
//! assert_eq!(display, "1.5".parse::<BigDecimal>().unwrap());
//!
//! let explorer = ethereum.explorer().unwrap();
//! assert_eq!(explorer.block_url(1), "https://etherscan.io/block/1");
//! ```

pub mod amount;
pub mod config;
pub mod errors;
pub mod explorer;
mod spans;
pub mod types;

pub use amount::{decimal_wei_to_display, format_units, to_display, to_raw};
pub use config::constants::{
    BNB_SMART_CHAIN_ID, DEFAULT_CONFIG_FILENAME, ETHEREUM_ID, GOERLI_ID, KOVAN_ID, RINKEBY_ID,
    ROPSTEN_ID, TEST_BNB_SMART_CHAIN_ID,
};
pub use config::{default_config_path, ChainConfig, ChainConfigStore, Relayer, RpcUrl, Token};
pub use errors::{AmountError, ChainConfigError, ConfigError, ExplorerError};
pub use explorer::{ensure_hex_prefix, ExplorerUrl};
pub use types::tokens::{bigint_to_u256, u256_to_bigint, TokenAmount, TokenDecimals};
