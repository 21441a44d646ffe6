// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for block explorer URL building.

/// Errors that can occur when deriving URLs from an explorer template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplorerError {
    /// The template's address prefix does not end with `/address/`.
    ///
    /// This is a defect in the configuration data. The main URL prefix (and
    /// everything derived from it, such as token URLs) cannot be computed.
    #[error("Malformed explorer template: address prefix {address:?} does not end with \"/address/\"")]
    MalformedTemplate {
        /// The offending address prefix
        address: String,
    },
}

impl ExplorerError {
    /// Create a `MalformedTemplate` error for an address prefix.
    pub fn malformed_template(address: impl Into<String>) -> Self {
        ExplorerError::MalformedTemplate {
            address: address.into(),
        }
    }
}
