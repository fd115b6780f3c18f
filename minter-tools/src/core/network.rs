// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network guard.
//!
//! Wallets report the active chain as a hex string (`eth_chainId`), and the guard compares that
//! string against the single chain the contract lives on. No normalization beyond lowercasing
//! the hex digits is done.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    core::wallet::{Wallet, WalletError},
    utils::color::Color,
};

/// Chain id of the Rinkeby test network.
pub const RINKEBY_CHAIN_ID: &str = "0x4";

/// A chain identifier as reported by a wallet, e.g. `0x4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(format!("{id:#x}"))
    }
}

impl From<&str> for ChainId {
    fn from(id: &str) -> Self {
        Self(id.to_ascii_lowercase())
    }
}

impl From<String> for ChainId {
    fn from(id: String) -> Self {
        id.as_str().into()
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkGuard {
    expected: ChainId,
}

impl NetworkGuard {
    pub fn new(expected: impl Into<ChainId>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &ChainId {
        &self.expected
    }

    pub fn is_expected(&self, chain_id: &ChainId) -> bool {
        *chain_id == self.expected
    }
}

/// Queries the chain the wallet is currently connected to.
pub async fn current_chain_id(wallet: &impl Wallet) -> Result<ChainId, WalletError> {
    let chain_id = wallet.chain_id().await?;
    info!(@grey, "Connected to chain {}", chain_id.lavender());
    Ok(chain_id)
}
