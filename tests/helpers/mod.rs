// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for evm-chain-config integration tests
//!
//! Provides configuration fixtures on disk and a tracing subscriber so that
//! loading spans show up in test output with `RUST_LOG=debug`.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// A minimal document with a single chain and one ERC-20 token
pub const MINIMAL_CONFIG: &str = r#"{
    "netId1": {
        "EIP1559Enabled": true,
        "nativeCurrency": "eth",
        "currencyName": "ETH",
        "explorerUrl": {
            "tx": "https://etherscan.io/tx/",
            "address": "https://etherscan.io/address/",
            "block": "https://etherscan.io/block/"
        },
        "merkleTreeHeight": "20",
        "tokens": {
            "eth": {
                "mixerAddress": { "1": "0x47CE0C6eD5B0Ce3d3A51fdb1C52DC66a7c3c2936" },
                "symbol": "ETH",
                "decimals": 18
            },
            "usdc": {
                "mixerAddress": { "100": "0xd96f2B1c14Db8458374d9Aca76E26c3D18364307" },
                "symbol": "USDC",
                "decimals": "6",
                "tokenAddress": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
            }
        }
    }
}"#;

/// Install a fmt subscriber honoring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A configuration file inside a temporary directory
///
/// The directory is removed when the fixture is dropped.
pub struct ConfigFixture {
    dir: TempDir,
    path: PathBuf,
}

impl ConfigFixture {
    /// Write `contents` to a fresh temporary file
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("networks.json");

        let mut file = std::fs::File::create(&path).expect("create config file");
        file.write_all(contents.as_bytes())
            .expect("write config file");

        Self { dir, path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Path in the same directory that does not exist
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("missing.json")
    }
}
