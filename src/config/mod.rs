// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain configuration store
//!
//! The configuration is a single JSON document mapping `netId<N>` keys to the
//! [`ChainConfig`] of chain `N`. It is parsed once and is read-only afterwards.
//!
//! # Example: Using the bundled document
//!
//! ```rust
//! use evm_chain_config::{ChainConfigStore, ETHEREUM_ID};
//!
//! let store = ChainConfigStore::bundled().unwrap();
//! let ethereum = store.chain(ETHEREUM_ID).unwrap();
//! assert_eq!(ethereum.currency_name, "ETH");
//! ```
//!
//! # Example: Loading a file
//!
//! ```rust,no_run
//! use evm_chain_config::ChainConfigStore;
//!
//! let store = ChainConfigStore::from_file("config/networks.json").unwrap();
//! for chain_id in store.chain_ids() {
//!     println!("chain {}", chain_id);
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use alloy_chains::NamedChain;
use tracing::{debug, info, warn, Instrument};

use crate::errors::ConfigError;
use crate::spans;

pub mod constants;
mod de;
mod models;

pub use models::{ChainConfig, Relayer, RpcUrl, Token};

use constants::{net_id_key, parse_net_id_key, DEFAULT_CONFIG_FILENAME};

/// Document compiled into the crate, same shape as the default file
const BUNDLED_CONFIG: &str = include_str!("../../resources/default-ethereum-config.json");

/// Read-only view over a parsed configuration document
#[derive(Debug, Clone, Default)]
pub struct ChainConfigStore {
    chains: BTreeMap<String, ChainConfig>,
}

impl ChainConfigStore {
    /// Parse a configuration document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a
    /// chain entry does not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let span = spans::parse_chain_config(json.len());
        let _guard = span.enter();

        let chains: BTreeMap<String, ChainConfig> = serde_json::from_str(json)?;
        debug!(chain_count = chains.len(), "Parsed chain config");

        Ok(Self { chains })
    }

    /// The default document shipped with this crate
    ///
    /// Covers Ethereum mainnet, Goerli, BNB Smart Chain and its testnet.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_CONFIG)
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileNotFound`] if `path` does not exist
    /// - [`ConfigError::Io`] if it cannot be read
    /// - [`ConfigError::Parse`] if its content is not a valid document
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let span = spans::load_config_file(path);
        let _guard = span.enter();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), chain_count = store.len(), "Loaded chain config");

        Ok(store)
    }

    /// Read and parse a configuration file without blocking the runtime
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file).
    pub async fn from_file_async(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let span = spans::load_config_file(path);

        async move {
            if !tokio::fs::try_exists(path).await? {
                return Err(ConfigError::file_not_found(path));
            }

            let json = tokio::fs::read_to_string(path).await?;
            let store = Self::from_json(&json)?;
            info!(path = %path.display(), chain_count = store.len(), "Loaded chain config");

            Ok(store)
        }
        .instrument(span)
        .await
    }

    /// Load [`DEFAULT_CONFIG_FILENAME`] from the directory of the running executable
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DefaultLocationUnavailable`] if the executable's
    ///   directory cannot be determined
    /// - everything [`from_file`](Self::from_file) returns
    pub fn from_default_file() -> Result<Self, ConfigError> {
        Self::from_file(default_config_path()?)
    }

    /// Async variant of [`from_default_file`](Self::from_default_file)
    pub async fn from_default_file_async() -> Result<Self, ConfigError> {
        Self::from_file_async(default_config_path()?).await
    }

    /// Configuration of a chain
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ChainNotFound`] if the document has no `netId<chain_id>` entry.
    pub fn chain(&self, chain_id: u64) -> Result<&ChainConfig, ConfigError> {
        self.chains
            .get(&net_id_key(chain_id))
            .ok_or_else(|| ConfigError::chain_not_found(chain_id))
    }

    /// Configuration of a well-known chain
    ///
    /// ```rust
    /// use alloy_chains::NamedChain;
    /// use evm_chain_config::ChainConfigStore;
    ///
    /// let store = ChainConfigStore::bundled().unwrap();
    /// let bsc = store.named_chain(NamedChain::BinanceSmartChain).unwrap();
    /// assert_eq!(bsc.currency_name, "BNB");
    /// ```
    pub fn named_chain(&self, chain: NamedChain) -> Result<&ChainConfig, ConfigError> {
        self.chain(chain as u64)
    }

    /// Ids of all chains in the document, ascending
    ///
    /// Keys that are not of the form `netId<N>` are skipped, as are ids written
    /// with a sign or leading zeros.
    pub fn chain_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .chains
            .keys()
            .filter_map(|key| {
                let id = parse_net_id_key(key);
                if id.is_none() {
                    warn!(key = %key, "Skipping config key that is not a chain id");
                }
                id
            })
            .collect();

        ids.sort_unstable();
        ids
    }

    /// All chains with their ids, ascending by id
    pub fn chains(&self) -> impl Iterator<Item = (u64, &ChainConfig)> + '_ {
        self.chain_ids().into_iter().filter_map(move |id| {
            self.chains
                .get(&net_id_key(id))
                .map(|config| (id, config))
        })
    }

    /// Number of entries in the document
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Path of [`DEFAULT_CONFIG_FILENAME`] next to the running executable
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe()
        .map_err(|e| ConfigError::default_location_unavailable(DEFAULT_CONFIG_FILENAME, e))?;

    let dir = exe.parent().ok_or_else(|| {
        ConfigError::default_location_unavailable(
            DEFAULT_CONFIG_FILENAME,
            "executable has no parent directory",
        )
    })?;

    Ok(dir.join(DEFAULT_CONFIG_FILENAME))
}
