// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Print explorer links and mixer denominations for every bundled chain
//!
//! Usage:
//! ```bash
//! RUST_LOG=evm_chain_config=debug cargo run --example explorer_links -- [CONFIG_PATH]
//! ```
//!
//! Without `CONFIG_PATH` the configuration compiled into the crate is used.

use anyhow::Result;
use evm_chain_config::{format_units, ChainConfigStore, TokenDecimals};
use num_bigint::BigInt;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HOLDER: &str = "00000000219ab540356cbb839cbe05303d7705fa";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = match std::env::args().nth(1) {
        Some(path) => ChainConfigStore::from_file_async(path).await?,
        None => ChainConfigStore::bundled()?,
    };

    for (chain_id, config) in store.chains() {
        info!(chain_id, network = %config.network_name, "Chain");

        let explorer = config.explorer()?;
        println!("{} ({})", config.network_name, config.currency_name);
        println!("  holder:  {}", explorer.address_url(HOLDER));
        if let Some(block) = config.deployed_block {
            println!("  deployed: {}", explorer.block_url(block));
        }

        for (id, token) in &config.tokens {
            let denominations: Vec<String> = token
                .amounts()?
                .iter()
                .map(|amount| amount.normalized().to_string())
                .collect();

            let balance = explorer.balance_url(HOLDER, token.token_address.as_deref())?;
            println!("  {id}: [{}] {balance}", denominations.join(", "));
        }
    }

    let one_gwei = BigInt::from(1_000_000_000u64);
    println!(
        "1 gwei = {} ETH",
        format_units(TokenDecimals::STANDARD, &one_gwei)?
    );

    Ok(())
}
