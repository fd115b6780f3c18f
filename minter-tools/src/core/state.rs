// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use alloy::primitives::Address;
use tokio::sync::watch;

use crate::core::network::ChainId;

/// Everything the view shows. Lives as long as its controller and starts empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintState {
    /// Authorized account on the expected network.
    pub account: Option<Address>,
    /// Marketplace page of the most recently minted token.
    pub marketplace_link: Option<String>,
    /// Tokens minted so far, as read at startup.
    pub minted_count: u64,
    /// A mint transaction is waiting for confirmation.
    pub minting: bool,
    /// Last warning shown to the user.
    pub alert: Option<Alert>,
}

impl MintState {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Alert {
    MissingWallet,
    WrongNetwork { expected: ChainId, actual: ChainId },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWallet => f.write_str("Get a wallet!"),
            Self::WrongNetwork { expected, actual } => write!(
                f,
                "You are not connected to the expected network! (on {actual}, expected {expected})"
            ),
        }
    }
}

/// Holds `minting` up while alive.
pub(crate) struct InFlight<'a> {
    state: &'a watch::Sender<MintState>,
}

impl<'a> InFlight<'a> {
    pub fn begin(state: &'a watch::Sender<MintState>) -> Self {
        state.send_modify(|state| state.minting = true);
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.minting = false);
    }
}
