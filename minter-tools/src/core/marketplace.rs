// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Links to third-party pages about the collection. Pure string templating, nothing here is
//! fetched or validated.

use alloy::primitives::{TxHash, U256};

use crate::config::MinterConfig;

/// Marketplace links for one contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marketplace {
    asset_base: String,
    collection: String,
}

impl Marketplace {
    pub fn new(config: &MinterConfig) -> Self {
        let base = config.marketplace_url.trim_end_matches('/');
        Self {
            asset_base: format!("{base}/assets/{}/", config.contract_address),
            collection: format!("{base}/collection/{}", config.collection_slug),
        }
    }

    /// Prefix every asset link starts with; the token id is appended as-is.
    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    pub fn asset_link(&self, token_id: U256) -> String {
        format!("{}{token_id}", self.asset_base)
    }

    pub fn collection_link(&self) -> &str {
        &self.collection
    }
}

/// Block explorer page for a transaction.
pub fn tx_link(config: &MinterConfig, tx_hash: TxHash) -> String {
    format!("{}/tx/{tx_hash}", config.explorer_url.trim_end_matches('/'))
}

pub fn social_link(handle: &str) -> String {
    format!("https://twitter.com/{handle}")
}
