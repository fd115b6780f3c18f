// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The capabilities a wallet provider exposes to the minting flows.

use alloy::{
    primitives::Address,
    transports::{RpcError, TransportErrorKind},
};
use async_trait::async_trait;

use crate::core::{contract::NftContract, network::ChainId};

/// JSON-RPC error code wallets return when the user declines a request (EIP-1193).
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// A wallet provider, such as a browser extension or a node holding unlocked accounts.
///
/// The controller receives an `Option` of one of these: `None` means no provider was found and
/// every flow degrades to a logged no-op.
#[async_trait]
pub trait Wallet: Send + Sync {
    type Contract: NftContract + 'static;

    /// Lists the accounts already authorized for this client, without prompting (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// The chain the wallet is currently connected to (`eth_chainId`).
    async fn chain_id(&self) -> Result<ChainId, WalletError>;

    /// Asks the user to authorize an account (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Binds the NFT contract at `address`, signing with this wallet.
    fn contract(&self, address: Address) -> Self::Contract;
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("rpc error: {0}")]
    Rpc(RpcError<TransportErrorKind>),

    #[error("request rejected by user: {0}")]
    Rejected(String),
    #[error("wallet returned no accounts")]
    NoAccounts,
}

impl From<RpcError<TransportErrorKind>> for WalletError {
    fn from(err: RpcError<TransportErrorKind>) -> Self {
        match err.as_error_resp() {
            Some(payload) if payload.code == USER_REJECTED_REQUEST => {
                Self::Rejected(payload.message.to_string())
            }
            _ => Self::Rpc(err),
        }
    }
}
