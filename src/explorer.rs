// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block explorer URL templates
//!
//! An [`ExplorerUrl`] holds the three URL prefixes an explorer uses for
//! transactions, addresses and blocks. Every other page (the explorer root,
//! token pages, token balances) is derived from the address prefix, which
//! therefore has to end with `/address/`.
//!
//! Hex fragments supplied by callers may omit the `0x` prefix; it is added
//! where missing. Templates are used verbatim and never re-cased.
//!
//! # Example
//!
//! ```rust
//! use evm_chain_config::ExplorerUrl;
//!
//! let etherscan = ExplorerUrl::new(
//!     "https://etherscan.io/tx/",
//!     "https://etherscan.io/address/",
//!     "https://etherscan.io/block/",
//! );
//!
//! assert_eq!(
//!     etherscan.address_url("00000000219ab540356cbb839cbe05303d7705fa"),
//!     "https://etherscan.io/address/0x00000000219ab540356cbb839cbe05303d7705fa"
//! );
//! assert_eq!(etherscan.block_url(1337), "https://etherscan.io/block/1337");
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::ExplorerError;

/// Suffix every address prefix must carry
const ADDRESS_SUFFIX: &str = "/address/";

/// Prefix of hex-encoded identifiers
const HEX_PREFIX: &str = "0x";

/// Add `0x` to a hex fragment unless it already starts with it (case-sensitive)
///
/// # Examples
///
/// ```rust
/// use evm_chain_config::ensure_hex_prefix;
///
/// assert_eq!(ensure_hex_prefix("abc"), "0xabc");
/// assert_eq!(ensure_hex_prefix("0xabc"), "0xabc");
/// ```
pub fn ensure_hex_prefix(fragment: &str) -> Cow<'_, str> {
    if fragment.starts_with(HEX_PREFIX) {
        Cow::Borrowed(fragment)
    } else {
        Cow::Owned(format!("{HEX_PREFIX}{fragment}"))
    }
}

/// URL prefixes of a chain's block explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerUrl {
    /// Transaction prefix URL
    pub tx: String,

    /// Address prefix URL, ending with `/address/`
    pub address: String,

    /// Block prefix URL
    pub block: String,
}

impl ExplorerUrl {
    /// Create a template from its three prefixes
    pub fn new(tx: impl Into<String>, address: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            tx: tx.into(),
            address: address.into(),
            block: block.into(),
        }
    }

    /// Explorer root: the address prefix without its `/address/` suffix
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MalformedTemplate`] if the address prefix does not
    /// end with `/address/`.
    pub fn main_url_prefix(&self) -> Result<&str, ExplorerError> {
        self.address
            .strip_suffix(ADDRESS_SUFFIX)
            .ok_or_else(|| ExplorerError::malformed_template(&self.address))
    }

    /// Token prefix URL, `{main_url_prefix}/token/`
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MalformedTemplate`] if the address prefix does not
    /// end with `/address/`.
    pub fn token_url_prefix(&self) -> Result<String, ExplorerError> {
        Ok(format!("{}/token/", self.main_url_prefix()?))
    }

    /// Page of a transaction
    pub fn transaction_url(&self, tx_id: &str) -> String {
        format!("{}{}", self.tx, ensure_hex_prefix(tx_id))
    }

    /// Page of an account or contract address
    pub fn address_url(&self, address: &str) -> String {
        format!("{}{}", self.address, ensure_hex_prefix(address))
    }

    /// Page of a token contract
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MalformedTemplate`] if the address prefix does not
    /// end with `/address/`.
    pub fn token_url(&self, token: &str) -> Result<String, ExplorerError> {
        Ok(format!("{}{}", self.token_url_prefix()?, ensure_hex_prefix(token)))
    }

    /// Page of a block
    pub fn block_url(&self, block_number: u64) -> String {
        format!("{}{}", self.block, block_number)
    }

    /// Balance page of an address, for the native currency or for a token
    ///
    /// `None` and `Some("")` both select the native currency balance, which is
    /// the address page. For a token the token page filtered by holder is used.
    /// Both hex fragments are lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MalformedTemplate`] when a token is given and the
    /// address prefix does not end with `/address/`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evm_chain_config::ExplorerUrl;
    ///
    /// let etherscan = ExplorerUrl::new(
    ///     "https://etherscan.io/tx/",
    ///     "https://etherscan.io/address/",
    ///     "https://etherscan.io/block/",
    /// );
    ///
    /// let url = etherscan
    ///     .balance_url(
    ///         "00000000219ab540356cbb839cbe05303d7705fa",
    ///         Some("dac17f958d2ee523a2206206994597c13d831ec7"),
    ///     )
    ///     .unwrap();
    /// assert_eq!(
    ///     url,
    ///     "https://etherscan.io/token/0xdac17f958d2ee523a2206206994597c13d831ec7?a=0x00000000219ab540356cbb839cbe05303d7705fa"
    /// );
    /// ```
    pub fn balance_url(&self, address: &str, token: Option<&str>) -> Result<String, ExplorerError> {
        let holder = ensure_hex_prefix(address).to_lowercase();

        match token.filter(|token| !token.is_empty()) {
            None => Ok(format!("{}{}", self.address, holder)),
            Some(token) => Ok(format!(
                "{}{}?a={}",
                self.token_url_prefix()?,
                ensure_hex_prefix(token).to_lowercase(),
                holder
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x00000000219ab540356cbb839cbe05303d7705fa";
    const TOKEN: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";

    fn etherscan() -> ExplorerUrl {
        ExplorerUrl::new(
            "https://etherscan.io/tx/",
            "https://etherscan.io/address/",
            "https://etherscan.io/block/",
        )
    }

    fn unprefixed(fragment: &str) -> &str {
        fragment.trim_start_matches("0x")
    }

    // ========== ensure_hex_prefix tests ==========

    #[test]
    fn ensure_hex_prefix_borrows_prefixed_input() {
        assert!(matches!(ensure_hex_prefix(ADDRESS), Cow::Borrowed(_)));
        assert_eq!(ensure_hex_prefix(unprefixed(ADDRESS)), ADDRESS);
    }

    #[test]
    fn ensure_hex_prefix_is_case_sensitive() {
        assert_eq!(ensure_hex_prefix("0XABC"), "0x0XABC");
    }

    #[test]
    fn ensure_hex_prefix_empty_fragment() {
        assert_eq!(ensure_hex_prefix(""), "0x");
    }

    // ========== derived prefix tests ==========

    #[test]
    fn main_url_prefix_strips_address_suffix() {
        assert_eq!(etherscan().main_url_prefix().unwrap(), "https://etherscan.io");
        assert_eq!(
            etherscan().token_url_prefix().unwrap(),
            "https://etherscan.io/token/"
        );
    }

    #[test]
    fn main_url_prefix_rejects_malformed_template() {
        let mut template = etherscan();
        template.address = "https://etherscan.io/account/".to_string();

        assert_eq!(
            template.main_url_prefix(),
            Err(ExplorerError::malformed_template("https://etherscan.io/account/"))
        );
        assert!(template.token_url(TOKEN).is_err());
    }

    #[test]
    fn main_url_prefix_suffix_check_is_case_sensitive() {
        let mut template = etherscan();
        template.address = "https://etherscan.io/ADDRESS/".to_string();
        assert!(template.main_url_prefix().is_err());
    }

    #[test]
    fn main_url_prefix_requires_trailing_slash() {
        let mut template = etherscan();
        template.address = "https://etherscan.io/address".to_string();
        assert!(template.main_url_prefix().is_err());
    }

    // ========== page URL tests ==========

    #[test]
    fn address_url_with_and_without_prefix() {
        let expected = format!("https://etherscan.io/address/{ADDRESS}");
        assert_eq!(etherscan().address_url(ADDRESS), expected);
        assert_eq!(etherscan().address_url(unprefixed(ADDRESS)), expected);
    }

    #[test]
    fn transaction_url_with_and_without_prefix() {
        let tx = "0x3ae84d941086860d2be4b97e3e530198c098e966431c7b06253fb7fca62be3a9";
        let expected = format!("https://etherscan.io/tx/{tx}");
        assert_eq!(etherscan().transaction_url(tx), expected);
        assert_eq!(etherscan().transaction_url(unprefixed(tx)), expected);
    }

    #[test]
    fn token_url_with_and_without_prefix() {
        let expected = format!("https://etherscan.io/token/{TOKEN}");
        assert_eq!(etherscan().token_url(TOKEN).unwrap(), expected);
        assert_eq!(etherscan().token_url(unprefixed(TOKEN)).unwrap(), expected);
    }

    #[test]
    fn block_url_is_plain_decimal() {
        assert_eq!(etherscan().block_url(1337), "https://etherscan.io/block/1337");
        assert_eq!(etherscan().block_url(0), "https://etherscan.io/block/0");
    }

    #[test]
    fn address_url_keeps_caller_casing() {
        let checksummed = "0x00000000219ab540356cBB839Cbe05303d7705Fa";
        assert_eq!(
            etherscan().address_url(checksummed),
            format!("https://etherscan.io/address/{checksummed}")
        );
    }

    // ========== balance_url tests ==========

    #[test]
    fn balance_url_native_currency() {
        let expected = format!("https://etherscan.io/address/{ADDRESS}");
        for address in [ADDRESS, unprefixed(ADDRESS)] {
            assert_eq!(etherscan().balance_url(address, None).unwrap(), expected);
            assert_eq!(etherscan().balance_url(address, Some("")).unwrap(), expected);
        }
    }

    #[test]
    fn balance_url_token() {
        let expected = format!("https://etherscan.io/token/{TOKEN}?a={ADDRESS}");
        for address in [ADDRESS, unprefixed(ADDRESS)] {
            for token in [TOKEN, unprefixed(TOKEN)] {
                assert_eq!(
                    etherscan().balance_url(address, Some(token)).unwrap(),
                    expected
                );
            }
        }
    }

    #[test]
    fn balance_url_lowercases_fragments_only() {
        let template = ExplorerUrl::new(
            "https://Explorer.example/tx/",
            "https://Explorer.example/address/",
            "https://Explorer.example/block/",
        );

        assert_eq!(
            template
                .balance_url("00000000219AB540356CBB839CBE05303D7705FA", None)
                .unwrap(),
            format!("https://Explorer.example/address/{ADDRESS}")
        );
        assert_eq!(
            template
                .balance_url(ADDRESS, Some("DAC17F958D2EE523A2206206994597C13D831EC7"))
                .unwrap(),
            format!("https://Explorer.example/token/{TOKEN}?a={ADDRESS}")
        );
    }

    #[test]
    fn balance_url_native_ignores_malformed_template() {
        let mut template = etherscan();
        template.address = "https://etherscan.io/account/".to_string();

        assert!(template.balance_url(ADDRESS, None).is_ok());
        assert!(matches!(
            template.balance_url(ADDRESS, Some(TOKEN)),
            Err(ExplorerError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn deserializes_from_config_json() {
        let json = r#"{
            "tx": "https://bscscan.com/tx/",
            "address": "https://bscscan.com/address/",
            "block": "https://bscscan.com/block/"
        }"#;
        let template: ExplorerUrl = serde_json::from_str(json).unwrap();
        assert_eq!(template.main_url_prefix().unwrap(), "https://bscscan.com");
    }
}
