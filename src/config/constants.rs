// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known chain ids and configuration file names
//!
//! Chain ids are the numeric suffixes of the `netId<N>` keys in the
//! configuration document.

/// File name of the default configuration, looked up next to the executable
pub const DEFAULT_CONFIG_FILENAME: &str = "default-ethereum-config.json";

/// Prefix of every chain key in the configuration document
pub const NET_ID_KEY_PREFIX: &str = "netId";

/// Ethereum mainnet
///
/// <https://ethereum.org/>
pub const ETHEREUM_ID: u64 = 1;

/// Ropsten test network (deprecated)
pub const ROPSTEN_ID: u64 = 3;

/// Rinkeby test network (deprecated)
pub const RINKEBY_ID: u64 = 4;

/// Goerli test network
///
/// <https://goerli.net/>
pub const GOERLI_ID: u64 = 5;

/// Kovan test network
///
/// Keyed as `netId6` in existing configuration documents, although the chain
/// itself reported id 42.
pub const KOVAN_ID: u64 = 6;

/// BNB Smart Chain (formerly Binance Smart Chain)
///
/// <https://www.bnbchain.org/>
pub const BNB_SMART_CHAIN_ID: u64 = 56;

/// BNB Smart Chain testnet
pub const TEST_BNB_SMART_CHAIN_ID: u64 = 97;

/// Key of a chain in the configuration document, e.g. `netId1`
pub fn net_id_key(chain_id: u64) -> String {
    format!("{NET_ID_KEY_PREFIX}{chain_id}")
}

/// Chain id encoded in a `netId<N>` key, if the key has that form
///
/// Only the canonical form is accepted, the one [`net_id_key`] produces, so
/// every id returned here can be looked up again.
pub fn parse_net_id_key(key: &str) -> Option<u64> {
    let id = key.strip_prefix(NET_ID_KEY_PREFIX)?.parse().ok()?;
    (net_id_key(id) == key).then_some(id)
}
