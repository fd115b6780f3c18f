// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for minting from an NFT contract through a wallet provider.
//!
//! The [`MintController`] drives the whole flow: it probes for a [`Wallet`](core::wallet::Wallet),
//! guards the active network, connects an account, sends the mint transaction and listens for
//! the contract's minted event. Everything it knows is published as a
//! [`MintState`](core::state::MintState), which [`view::render`] turns into a [`Page`].

#[macro_use]
mod macros;

pub mod config;
pub mod controller;
pub mod core;
pub(crate) mod error;
pub mod utils;
pub mod view;

pub use config::MinterConfig;
pub use controller::MintController;
pub use error::{Error, Result};
pub use view::{render, Page};
