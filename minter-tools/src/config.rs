// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Minter configuration.
//!
//! A [`MinterConfig`] is built once and handed to the controller, which never changes it. Every
//! field has a default matching the Rinkeby deployment, so a config file only needs the fields
//! it overrides.

use std::{fs, path::Path};

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    core::network::{ChainId, NetworkGuard, RINKEBY_CHAIN_ID},
    Result,
};

pub const DEFAULT_CONTRACT_ADDRESS: Address =
    address!("0x6D4462350060D8987a52287ba943d8DBE115FCAC");
pub const DEFAULT_MARKETPLACE_URL: &str = "https://testnets.opensea.io";
pub const DEFAULT_COLLECTION_SLUG: &str = "squarenft-xbdcfbgyb0";
pub const DEFAULT_EXPLORER_URL: &str = "https://rinkeby.etherscan.io";
pub const DEFAULT_TOTAL_MINT_COUNT: u64 = 50;
pub const DEFAULT_SOCIAL_HANDLE: &str = "la_ayanbe";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, TypedBuilder)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MinterConfig {
    /// Address of the NFT contract.
    #[builder(default = DEFAULT_CONTRACT_ADDRESS)]
    pub contract_address: Address,
    /// The only chain minting is allowed on.
    #[builder(default = RINKEBY_CHAIN_ID.into(), setter(into))]
    pub chain_id: ChainId,
    #[builder(default = DEFAULT_MARKETPLACE_URL.to_owned(), setter(into))]
    pub marketplace_url: String,
    #[builder(default = DEFAULT_COLLECTION_SLUG.to_owned(), setter(into))]
    pub collection_slug: String,
    #[builder(default = DEFAULT_EXPLORER_URL.to_owned(), setter(into))]
    pub explorer_url: String,
    /// Supply cap shown next to the minted count.
    #[builder(default = DEFAULT_TOTAL_MINT_COUNT)]
    pub total_mint_count: u64,
    /// Social handle credited in the footer. An empty string in a file turns the footer off.
    #[builder(default = Some(DEFAULT_SOCIAL_HANDLE.to_owned()))]
    #[serde(with = "optional_handle")]
    pub social_handle: Option<String>,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MinterConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn network_guard(&self) -> NetworkGuard {
        NetworkGuard::new(self.chain_id.clone())
    }
}

/// `None` is written as an empty string, since TOML has no null.
mod optional_handle {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        handle: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(handle.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let handle = String::deserialize(deserializer)?;
        Ok(Some(handle).filter(|handle| !handle.is_empty()))
    }
}
