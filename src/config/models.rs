// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Records of the chain configuration document

use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::de;
use crate::amount::{to_display, to_raw};
use crate::errors::{ChainConfigError, ConfigError};
use crate::explorer::ExplorerUrl;
use crate::types::tokens::TokenDecimals;

/// Configuration of a single chain such as Ethereum, Goerli or BNB Smart Chain
///
/// Integer fields accept JSON numbers as well as numeric strings. Sections that
/// are absent from the document deserialize as empty maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// How many times an RPC call should be attempted
    #[serde(default, deserialize_with = "de::number_or_string")]
    pub rpc_call_retry_attempt: u32,

    /// Suggested gas prices in gwei by speed (`instant`, `fast`, ...)
    #[serde(default, deserialize_with = "de::decimal_map")]
    pub gas_prices: BTreeMap<String, BigDecimal>,

    /// Whether EIP-1559 fee markets are active on this chain
    ///
    /// <https://github.com/ethereum/EIPs/blob/master/EIPS/eip-1559.md>
    #[serde(rename = "EIP1559Enabled", default)]
    pub eip1559_enabled: bool,

    /// Token id of the native currency, a key of [`tokens`](Self::tokens)
    #[serde(default)]
    pub native_currency: String,

    /// Display name of the native currency, e.g. `ETH`
    #[serde(default)]
    pub currency_name: String,

    #[serde(default)]
    pub explorer_url: Option<ExplorerUrl>,

    #[serde(default)]
    pub update_trees_backend: String,

    #[serde(default, deserialize_with = "de::option_number_or_string")]
    pub merkle_tree_height: Option<u32>,

    #[serde(default, deserialize_with = "de::option_number_or_string")]
    pub merkle_tree_farmer_height: Option<u32>,

    /// Value of an empty Merkle tree leaf
    #[serde(default)]
    pub empty_element: String,

    #[serde(default)]
    pub network_name: String,

    /// Block the contracts were deployed in
    #[serde(default, deserialize_with = "de::option_number_or_string")]
    pub deployed_block: Option<u64>,

    /// RPC endpoints keyed by provider id
    #[serde(default)]
    pub rpc_urls: BTreeMap<String, RpcUrl>,

    #[serde(default)]
    pub multicall: String,

    #[serde(default)]
    pub echo_contract: String,

    #[serde(default)]
    pub echo_contract_account: String,

    #[serde(default)]
    pub aggregator_contract: String,

    /// Tokens keyed by lower-case symbol
    #[serde(default)]
    pub tokens: BTreeMap<String, Token>,

    /// Relayers keyed by ENS name
    #[serde(default)]
    pub relayers: BTreeMap<String, Relayer>,

    /// Polling interval in seconds
    #[serde(default, deserialize_with = "de::option_number_or_string")]
    pub poll_interval: Option<u64>,

    /// Named block numbers and other chain constants
    #[serde(default)]
    pub constants: BTreeMap<String, i64>,

    #[serde(rename = "torn.contract.tornadocash.eth", default)]
    pub torn_contract: Option<String>,

    #[serde(rename = "governance.contract.tornadocash.eth", default)]
    pub governance_contract: Option<String>,

    #[serde(rename = "reward-swap.contract.tornadocash.eth", default)]
    pub reward_swap_contract: Option<String>,

    #[serde(rename = "tornado-proxy.contract.tornadocash.eth", default)]
    pub tornado_proxy_contract: Option<String>,

    #[serde(rename = "tornado-proxy-light.contract.tornadocash.eth", default)]
    pub tornado_proxy_light_contract: Option<String>,

    #[serde(rename = "tornado-trees.contract.tornadocash.eth", default)]
    pub tornado_trees_contract: Option<String>,

    #[serde(rename = "mining-v2.contract.tornadocash.eth", default)]
    pub mining_v2_contract: Option<String>,

    #[serde(rename = "voucher.contract.tornadocash.eth", default)]
    pub voucher_contract: Option<String>,
}

impl ChainConfig {
    /// Non-empty RPC URLs, each ending with exactly one `/`
    pub fn rpc_urls(&self) -> Vec<String> {
        self.rpc_urls
            .values()
            .map(|rpc| rpc.url.as_str())
            .filter(|url| !url.is_empty())
            .map(|url| format!("{}/", url.trim_end_matches('/')))
            .collect()
    }

    /// Token by id
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TokenNotFound`] if the chain has no such token.
    pub fn token(&self, token_id: &str) -> Result<&Token, ConfigError> {
        self.tokens
            .get(token_id)
            .ok_or_else(|| ConfigError::token_not_found(&self.currency_name, token_id))
    }

    /// Decimals of the native currency token
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TokenNotFound`] if `nativeCurrency` names no token
    /// - [`ConfigError::MissingField`] if that token has no `decimals`
    pub fn native_currency_decimals(&self) -> Result<TokenDecimals, ConfigError> {
        self.token(&self.native_currency)?.token_decimals()
    }

    /// Explorer template
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if the chain has no `explorerUrl`.
    pub fn explorer(&self) -> Result<&ExplorerUrl, ConfigError> {
        self.explorer_url
            .as_ref()
            .ok_or_else(|| ConfigError::missing_field("explorerUrl"))
    }

    /// Tornado proxy address, falling back to the light proxy
    pub fn tornado_proxy(&self) -> Option<&str> {
        self.tornado_proxy_contract
            .as_deref()
            .or(self.tornado_proxy_light_contract.as_deref())
    }

    /// Display amount of a raw amount of one of this chain's tokens
    pub fn display_amount(
        &self,
        token_id: &str,
        raw: &BigInt,
    ) -> Result<BigDecimal, ChainConfigError> {
        let decimals = self.token(token_id)?.token_decimals()?;
        Ok(to_display(decimals, raw)?)
    }

    /// Raw amount of a display amount of one of this chain's tokens
    pub fn raw_amount(
        &self,
        token_id: &str,
        display: &BigDecimal,
    ) -> Result<BigInt, ChainConfigError> {
        let decimals = self.token(token_id)?.token_decimals()?;
        Ok(to_raw(decimals, display)?)
    }
}

/// A token usable on a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Mixer contract address by denomination; `null` marks a retired pool
    #[serde(default)]
    pub mixer_address: BTreeMap<String, Option<String>>,

    #[serde(default)]
    pub mining_enabled: bool,

    #[serde(default)]
    pub symbol: String,

    /// Unset when the document omits it; amounts of such a token cannot be converted
    #[serde(default, deserialize_with = "de::option_token_decimals")]
    pub decimals: Option<TokenDecimals>,

    /// ERC-20 contract address, absent for the native currency
    #[serde(default)]
    pub token_address: Option<String>,

    #[serde(default, deserialize_with = "de::option_number_or_string")]
    pub gas_limit: Option<u64>,
}

impl Token {
    /// Decimals of the token
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if the document leaves them unset.
    pub fn token_decimals(&self) -> Result<TokenDecimals, ConfigError> {
        self.decimals.ok_or_else(|| ConfigError::missing_field("decimals"))
    }

    /// Denominations that have a deployed mixer, in ascending order
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDenomination`] if a key is not a decimal number.
    pub fn amounts(&self) -> Result<Vec<BigDecimal>, ConfigError> {
        let mut amounts = self
            .mixer_address
            .iter()
            .filter(|(_, address)| address.as_deref().is_some_and(|a| !a.is_empty()))
            .map(|(denomination, _)| {
                BigDecimal::from_str(denomination)
                    .map_err(|_| ConfigError::invalid_denomination(denomination))
            })
            .collect::<Result<Vec<_>, _>>()?;

        amounts.sort();
        Ok(amounts)
    }
}

/// An RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcUrl {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A transaction relayer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relayer {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cached_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN_JSON: &str = r#"{
        "rpcCallRetryAttempt": "15",
        "gasPrices": { "instant": 80, "fast": 50.5 },
        "EIP1559Enabled": true,
        "nativeCurrency": "eth",
        "currencyName": "ETH",
        "explorerUrl": {
            "tx": "https://etherscan.io/tx/",
            "address": "https://etherscan.io/address/",
            "block": "https://etherscan.io/block/"
        },
        "merkleTreeHeight": "20",
        "deployedBlock": 9116966,
        "rpcUrls": {
            "a": { "name": "A", "url": "https://rpc.example.org//" },
            "b": { "name": "B", "url": "" },
            "c": { "name": "C", "url": "https://other.example.org" }
        },
        "tokens": {
            "eth": {
                "mixerAddress": {
                    "10": "0x910Cbd523D972eb0a6f4cAe4618aD62622b39DbF",
                    "0.1": "0x12D66f87A04A9E220743712cE6d9bB1B5616B8Fc",
                    "1": "0x47CE0C6eD5B0Ce3d3A51fdb1C52DC66a7c3c2936",
                    "1000": null,
                    "500": ""
                },
                "symbol": "ETH",
                "decimals": 18
            },
            "usdc": {
                "mixerAddress": {},
                "symbol": "USDC",
                "decimals": "6",
                "tokenAddress": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                "gasLimit": "80000"
            }
        },
        "tornado-proxy-light.contract.tornadocash.eth": "0x0D5550d52428E7e3175bfc9550207e4ad3859b17"
    }"#;

    fn chain() -> ChainConfig {
        serde_json::from_str(CHAIN_JSON).unwrap()
    }

    #[test]
    fn test_parses_mixed_number_encodings() {
        let config = chain();
        assert_eq!(config.rpc_call_retry_attempt, 15);
        assert!(config.eip1559_enabled);
        assert_eq!(config.merkle_tree_height, Some(20));
        assert_eq!(config.merkle_tree_farmer_height, None);
        assert_eq!(config.deployed_block, Some(9116966));
        assert_eq!(config.poll_interval, None);
        assert_eq!(
            config.gas_prices["fast"],
            BigDecimal::from_str("50.5").unwrap()
        );

        let usdc = config.token("usdc").unwrap();
        assert_eq!(usdc.decimals, Some(TokenDecimals::USDC));
        assert_eq!(usdc.gas_limit, Some(80000));
    }

    #[test]
    fn test_absent_sections_are_empty() {
        let config: ChainConfig = serde_json::from_str("{}").unwrap();
        assert!(config.tokens.is_empty());
        assert!(config.relayers.is_empty());
        assert!(config.explorer_url.is_none());
        assert!(matches!(
            config.explorer(),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_rpc_urls_normalize_trailing_slash() {
        assert_eq!(
            chain().rpc_urls(),
            vec![
                "https://rpc.example.org/".to_string(),
                "https://other.example.org/".to_string(),
            ]
        );
    }

    #[test]
    fn test_native_currency_decimals() {
        assert_eq!(
            chain().native_currency_decimals().unwrap(),
            TokenDecimals::STANDARD
        );
    }

    #[test]
    fn test_native_currency_missing_token() {
        let mut config = chain();
        config.native_currency = "bnb".to_string();
        assert!(matches!(
            config.native_currency_decimals(),
            Err(ConfigError::TokenNotFound { .. })
        ));
    }

    #[test]
    fn test_token_without_decimals_keeps_chain_usable() {
        let config: ChainConfig = serde_json::from_str(
            r#"{
                "nativeCurrency": "eth",
                "tokens": {
                    "eth": { "symbol": "ETH", "decimals": 18 },
                    "xyz": { "symbol": "XYZ" },
                    "nul": { "symbol": "NUL", "decimals": null }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.token("xyz").unwrap().decimals, None);
        assert_eq!(config.token("nul").unwrap().decimals, None);
        assert_eq!(
            config.native_currency_decimals().unwrap(),
            TokenDecimals::STANDARD
        );
        assert_eq!(
            config
                .display_amount("eth", &BigInt::from(1_500_000_000_000_000_000u64))
                .unwrap(),
            BigDecimal::from_str("1.5").unwrap()
        );

        assert!(matches!(
            config.display_amount("xyz", &BigInt::from(1u8)),
            Err(ChainConfigError::Config(ConfigError::MissingField { ref field })) if field == "decimals"
        ));
        assert!(matches!(
            config.raw_amount("xyz", &BigDecimal::from(1u8)),
            Err(ChainConfigError::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_native_currency_without_decimals() {
        let mut config = chain();
        config.tokens.get_mut("eth").unwrap().decimals = None;
        assert!(matches!(
            config.native_currency_decimals(),
            Err(ConfigError::MissingField { ref field }) if field == "decimals"
        ));
    }

    #[test]
    fn test_amounts_skip_retired_pools_and_sort() {
        let amounts = chain().token("eth").unwrap().amounts().unwrap();
        let expected: Vec<BigDecimal> = ["0.1", "1", "10"]
            .iter()
            .map(|v| BigDecimal::from_str(v).unwrap())
            .collect();
        assert_eq!(amounts, expected);
    }

    #[test]
    fn test_amounts_reject_bad_denomination() {
        let mut token = chain().token("eth").unwrap().clone();
        token
            .mixer_address
            .insert("lots".to_string(), Some("0x01".to_string()));
        assert!(matches!(
            token.amounts(),
            Err(ConfigError::InvalidDenomination { .. })
        ));
    }

    #[test]
    fn test_tornado_proxy_falls_back_to_light() {
        let mut config = chain();
        assert_eq!(
            config.tornado_proxy(),
            Some("0x0D5550d52428E7e3175bfc9550207e4ad3859b17")
        );

        config.tornado_proxy_contract =
            Some("0x722122dF12D4e14e13Ac3b6895a86e84145b6967".to_string());
        assert_eq!(
            config.tornado_proxy(),
            Some("0x722122dF12D4e14e13Ac3b6895a86e84145b6967")
        );
    }

    #[test]
    fn test_amount_conversion_uses_token_decimals() {
        let config = chain();
        let display = config
            .display_amount("usdc", &BigInt::from(1_500_000u64))
            .unwrap();
        assert_eq!(display, BigDecimal::from_str("1.5").unwrap());
        assert_eq!(
            config.raw_amount("usdc", &display).unwrap(),
            BigInt::from(1_500_000u64)
        );
        assert!(matches!(
            config.display_amount("dai", &BigInt::from(1u8)),
            Err(ChainConfigError::Config(ConfigError::TokenNotFound { .. }))
        ));
    }
}
