// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the evm-chain-config library.
//!
//! This module provides strongly-typed errors for all public APIs.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`AmountError`,
//!   `ExplorerError`, `ConfigError`)
//! - **Unified error type** (`ChainConfigError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use evm_chain_config::{ExplorerError, ExplorerUrl};
//!
//! let template = ExplorerUrl::new(
//!     "https://etherscan.io/tx/",
//!     "https://etherscan.io/account/",
//!     "https://etherscan.io/block/",
//! );
//!
//! match template.token_url("dac17f958d2ee523a2206206994597c13d831ec7") {
//!     Ok(url) => println!("Token page: {}", url),
//!     Err(ExplorerError::MalformedTemplate { address }) => {
//!         eprintln!("Bad address template {}", address);
//!     }
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use evm_chain_config::{ChainConfigError, ChainConfigStore, ETHEREUM_ID};
//!
//! fn token_page(store: &ChainConfigStore) -> Result<String, ChainConfigError> {
//!     let config = store.chain(ETHEREUM_ID)?;
//!     let url = config
//!         .explorer()?
//!         .token_url("dac17f958d2ee523a2206206994597c13d831ec7")?;
//!     Ok(url)
//! }
//!
//! let store = ChainConfigStore::bundled().unwrap();
//! assert!(token_page(&store).is_ok());
//! ```

mod amount;
mod config;
mod explorer;

pub use amount::AmountError;
pub use config::ConfigError;
pub use explorer::ExplorerError;

/// Unified error type for all evm-chain-config operations.
///
/// All module-specific error types automatically convert to `ChainConfigError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum ChainConfigError {
    /// Error from token amount conversion.
    #[error("Amount conversion error: {0}")]
    Amount(#[from] AmountError),

    /// Error from explorer URL building.
    #[error("Explorer URL error: {0}")]
    Explorer(#[from] ExplorerError),

    /// Error from loading or querying configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
