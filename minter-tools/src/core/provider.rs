// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! [`Wallet`] backed by a JSON-RPC provider.

use std::borrow::Cow;

use alloy::{primitives::Address, providers::Provider};
use async_trait::async_trait;

use crate::core::{
    contract::AlloyNftContract,
    network::ChainId,
    wallet::{Wallet, WalletError},
};

/// A wallet reached over JSON-RPC.
///
/// With a local signer the signer's address is the only account, and authorizing it needs no
/// round trip. Without one, account requests are forwarded to the node, which answers for the
/// accounts it manages.
#[derive(Clone, Debug)]
pub struct RpcWallet<P> {
    provider: P,
    signer: Option<Address>,
}

impl<P: Provider + Clone + 'static> RpcWallet<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            signer: None,
        }
    }

    /// Wraps a provider that signs locally as `signer`.
    pub fn with_signer(provider: P, signer: Address) -> Self {
        Self {
            provider,
            signer: Some(signer),
        }
    }
}

#[async_trait]
impl<P: Provider + Clone + 'static> Wallet for RpcWallet<P> {
    type Contract = AlloyNftContract<P>;

    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        match self.signer {
            Some(signer) => Ok(vec![signer]),
            None => Ok(self.provider.get_accounts().await?),
        }
    }

    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        Ok(self.provider.get_chain_id().await?.into())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if let Some(signer) = self.signer {
            return Ok(vec![signer]);
        }
        let accounts = self
            .provider
            .raw_request::<_, Vec<Address>>(Cow::Borrowed("eth_requestAccounts"), ())
            .await?;
        Ok(accounts)
    }

    fn contract(&self, address: Address) -> Self::Contract {
        AlloyNftContract::new(address, self.provider.clone())
    }
}
