// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading and querying chain configuration.
//!
//! This module provides error types for operations in the `config` module,
//! from reading the JSON document to looking up chains and tokens in it.

use std::path::PathBuf;

/// Errors that can occur while loading or querying chain configuration.
///
/// # Examples
///
/// ```rust
/// use evm_chain_config::{ChainConfigStore, ConfigError};
///
/// let store = ChainConfigStore::bundled().unwrap();
///
/// match store.chain(424242) {
///     Ok(config) => println!("Found {}", config.currency_name),
///     Err(ConfigError::ChainNotFound { chain_id }) => {
///         assert_eq!(chain_id, 424242);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Config file {} not found", .path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The directory of the running executable could not be determined.
    ///
    /// Only returned when locating the default configuration file.
    #[error("Cannot locate default config {filename}: {details}")]
    DefaultLocationUnavailable {
        /// Name of the default config file
        filename: String,
        /// Why the location could not be resolved
        details: String,
    },

    /// Reading the configuration file failed.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape.
    #[error("Failed to parse chain config: {0}")]
    Parse(#[from] serde_json::Error),

    /// No configuration exists for the requested chain id.
    #[error("Can not find chain {chain_id} in config")]
    ChainNotFound {
        /// The requested chain id
        chain_id: u64,
    },

    /// The chain has no token with the requested id.
    #[error("Can not find token {token} in config of chain {chain}")]
    TokenNotFound {
        /// Currency name of the chain that was searched
        chain: String,
        /// The requested token id
        token: String,
    },

    /// An optional section required by the caller is absent.
    #[error("Missing config field: {field}")]
    MissingField {
        /// Name of the absent field, as spelled in the JSON document
        field: String,
    },

    /// A mixer denomination key is not a decimal number.
    #[error("Invalid denomination {value:?}")]
    InvalidDenomination {
        /// The unparsable denomination key
        value: String,
    },
}

impl ConfigError {
    /// Create a `FileNotFound` error for a path.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::FileNotFound { path: path.into() }
    }

    /// Create a `ChainNotFound` error for a chain id.
    pub fn chain_not_found(chain_id: u64) -> Self {
        ConfigError::ChainNotFound { chain_id }
    }

    /// Create a `TokenNotFound` error.
    pub fn token_not_found(chain: impl Into<String>, token: impl Into<String>) -> Self {
        ConfigError::TokenNotFound {
            chain: chain.into(),
            token: token.into(),
        }
    }

    /// Create a `MissingField` error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ConfigError::MissingField {
            field: field.into(),
        }
    }

    /// Create an `InvalidDenomination` error.
    pub fn invalid_denomination(value: impl Into<String>) -> Self {
        ConfigError::InvalidDenomination {
            value: value.into(),
        }
    }

    /// Create a `DefaultLocationUnavailable` error.
    pub fn default_location_unavailable(
        filename: impl Into<String>,
        details: impl std::fmt::Display,
    ) -> Self {
        ConfigError::DefaultLocationUnavailable {
            filename: filename.into(),
            details: details.to_string(),
        }
    }
}
