// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! What the user sees, as a pure function of [`MintState`].

use std::fmt;

use alloy::primitives::Address;

use crate::{
    config::MinterConfig,
    core::{
        marketplace::{social_link, Marketplace},
        state::MintState,
    },
};

pub const TITLE: &str = "NFT Builder";
pub const SUBTITLE: &str = "Each unique. Each beautiful. Discover your NFT today.";

/// The one button on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Connect,
    Mint { busy: bool },
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connect => "Connect to Wallet",
            Self::Mint { busy: true } => "Minting",
            Self::Mint { busy: false } => "Mint NFT",
        }
    }

    /// A busy mint button can't be pressed again.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Mint { busy: true })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub account: Option<Address>,
    pub action: Action,
    pub alert: Option<String>,
    pub success_link: Option<String>,
    pub mint_count: String,
    pub collection_link: String,
    pub footer: Option<(String, String)>,
}

pub fn render(state: &MintState, config: &MinterConfig) -> Page {
    let action = match state.account {
        None => Action::Connect,
        Some(_) => Action::Mint {
            busy: state.minting,
        },
    };
    Page {
        account: state.account,
        action,
        alert: state.alert.as_ref().map(ToString::to_string),
        success_link: state.marketplace_link.clone(),
        mint_count: format!(
            "{}/{} NFTs minted so far",
            state.minted_count, config.total_mint_count
        ),
        collection_link: Marketplace::new(config).collection_link().to_owned(),
        footer: config
            .social_handle
            .as_deref()
            .map(|handle| (format!("built on @{handle}"), social_link(handle))),
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;
        if let Some(account) = &self.account {
            writeln!(f, "Connected as {account}")?;
        }
        match self.action {
            Action::Mint { busy: true } => writeln!(f, "[ ... {} ]", self.action.label())?,
            action => writeln!(f, "[ {} ]", action.label())?,
        }
        if let Some(alert) = &self.alert {
            writeln!(f, "! {alert}")?;
        }
        if let Some(link) = &self.success_link {
            writeln!(f, "Minted Success! See your nft from here: {link}")?;
        }
        writeln!(f, "{}", self.mint_count)?;
        writeln!(f, "View Collection on OpenSea: {}", self.collection_link)?;
        if let Some((text, link)) = &self.footer {
            write!(f, "{text} ({link})")?;
        }
        Ok(())
    }
}
