// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for configuration loading.
//!
//! Telemetry concerns are kept apart from the loading logic: each instrumented
//! operation has a corresponding span helper in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(path: &Path) -> Result<T> {
//!     let span = spans::my_operation(path);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use std::path::Path;

use tracing::{Level, Span};

/// Create span for loading a configuration file from disk.
///
/// Parent: None (root span for this operation)
/// Children: parse_chain_config span
#[inline]
pub(crate) fn load_config_file(path: &Path) -> Span {
    tracing::span!(
        Level::INFO,
        "evm_chain_config.load_config_file",
        path = %path.display(),
    )
}

/// Create span for parsing a configuration document.
///
/// Parent: load_config_file span, or None for in-memory documents
#[inline]
pub(crate) fn parse_chain_config(document_len: usize) -> Span {
    tracing::debug_span!(
        "evm_chain_config.parse_chain_config",
        document_len = document_len,
    )
}
