// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Binding to the NFT contract.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionBuilder, PendingTransactionError, Provider},
    sol,
    transports::{RpcError, TransportErrorKind},
};
use async_trait::async_trait;
use futures::{future, stream::BoxStream, StreamExt};

use crate::utils::color::DebugColor;

sol! {
    #[sol(rpc)]
    interface EpicNft {
        function makeAnEpicNFT() external;
        function getTotalNFTsMintedSoFar() external view returns (uint256);

        event NewEpicNFTMinted(address sender, uint256 tokenId);
    }
}

/// Payload of the contract's minted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintedEvent {
    pub from: Address,
    pub token_id: U256,
}

impl From<EpicNft::NewEpicNFTMinted> for MintedEvent {
    fn from(event: EpicNft::NewEpicNFTMinted) -> Self {
        Self {
            from: event.sender,
            token_id: event.tokenId,
        }
    }
}

/// The parts of a mint transaction's receipt the flows care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

pub type MintedEvents = BoxStream<'static, MintedEvent>;

/// A callable handle on the NFT contract.
#[async_trait]
pub trait NftContract: Send + Sync {
    fn address(&self) -> Address;

    /// Sends the mint transaction from `from`, returning as soon as it is submitted.
    async fn mint(&self, from: Address) -> Result<TxHash, ContractError>;

    /// Waits for the transaction to be included, failing if it reverted.
    async fn confirm(&self, tx_hash: TxHash) -> Result<MintReceipt, ContractError>;

    /// Number of tokens minted so far.
    async fn total_minted(&self) -> Result<u64, ContractError>;

    /// Starts listening for minted events. The stream lives until it is dropped.
    async fn minted_events(&self) -> Result<MintedEvents, ContractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] PendingTransactionError),
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),

    #[error("mint tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("minted count {0} does not fit in 64 bits")]
    CountOverflow(U256),
}

/// [`NftContract`] over an alloy provider. The provider signs whatever it sends.
#[derive(Clone, Debug)]
pub struct AlloyNftContract<P> {
    instance: EpicNft::EpicNftInstance<P>,
}

impl<P: Provider> AlloyNftContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: EpicNft::new(address, provider),
        }
    }
}

#[async_trait]
impl<P: Provider + Clone + 'static> NftContract for AlloyNftContract<P> {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn mint(&self, from: Address) -> Result<TxHash, ContractError> {
        let pending_tx = self.instance.makeAnEpicNFT().from(from).send().await?;
        let tx_hash = *pending_tx.tx_hash();
        debug!(@grey, "sent mint tx: {}", tx_hash.debug_lavender());
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<MintReceipt, ContractError> {
        let root = self.instance.provider().root().clone();
        let receipt = PendingTransactionBuilder::new(root, tx_hash)
            .get_receipt()
            .await?;
        if !receipt.status() {
            return Err(ContractError::Reverted { tx_hash });
        }
        Ok(MintReceipt {
            tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }

    async fn total_minted(&self) -> Result<u64, ContractError> {
        let count = self.instance.getTotalNFTsMintedSoFar().call().await?;
        u64::try_from(count).map_err(|_| ContractError::CountOverflow(count))
    }

    async fn minted_events(&self) -> Result<MintedEvents, ContractError> {
        let poller = self.instance.NewEpicNFTMinted_filter().watch().await?;
        let events = poller.into_stream().filter_map(|item| {
            future::ready(match item {
                Ok((event, _log)) => Some(MintedEvent::from(event)),
                Err(err) => {
                    warn!(@yellow, "skipping undecodable minted event: {err}");
                    None
                }
            })
        });
        Ok(events.boxed())
    }
}
