// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-memory wallet and contract for exercising the flows without a node.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use alloy::{
    primitives::{address, Address, TxHash, U256},
    rpc::json_rpc::{ErrorPayload, RpcError},
};
use async_trait::async_trait;
use futures::{channel::mpsc, StreamExt};
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::core::{
    contract::{ContractError, MintReceipt, MintedEvent, MintedEvents, NftContract},
    network::{ChainId, RINKEBY_CHAIN_ID},
    wallet::{Wallet, WalletError},
};

pub const ALICE: Address = address!("0x00000000000000000000000000000000000a11ce");

pub struct MockWallet {
    pub accounts: Vec<Address>,
    pub chain_id: ChainId,
    pub reject: bool,
    pub contract: MockContract,
}

impl MockWallet {
    /// Wallet on the expected network with one authorized account.
    pub fn new() -> Self {
        Self {
            accounts: vec![ALICE],
            chain_id: RINKEBY_CHAIN_ID.into(),
            reject: false,
            contract: MockContract::default(),
        }
    }

    pub fn on_chain(mut self, chain_id: impl Into<ChainId>) -> Self {
        self.chain_id = chain_id.into();
        self
    }

    pub fn without_accounts(mut self) -> Self {
        self.accounts.clear();
        self
    }

    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }
}

#[async_trait]
impl Wallet for MockWallet {
    type Contract = MockContract;

    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        Ok(self.chain_id.clone())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if self.reject {
            return Err(WalletError::Rejected("User rejected the request.".into()));
        }
        Ok(vec![ALICE])
    }

    fn contract(&self, address: Address) -> Self::Contract {
        *self.contract.inner.bound.lock() = address;
        self.contract.clone()
    }
}

/// Contract double. Clones share state, so a test keeps one to drive and inspect the copy the
/// controller binds.
#[derive(Clone, Default)]
pub struct MockContract {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    bound: Mutex<Address>,
    total_minted: u64,
    count_reads: AtomicUsize,
    mints: AtomicUsize,
    revert: AtomicBool,
    reject_send: AtomicBool,
    hold_confirmation: AtomicBool,
    release: Notify,
    listener: Mutex<Option<mpsc::UnboundedSender<MintedEvent>>>,
}

impl MockContract {
    pub fn with_total_minted(total_minted: u64) -> Self {
        Self {
            inner: Arc::new(Inner {
                total_minted,
                ..Default::default()
            }),
        }
    }

    pub fn count_reads(&self) -> usize {
        self.inner.count_reads.load(Ordering::SeqCst)
    }

    pub fn mints(&self) -> usize {
        self.inner.mints.load(Ordering::SeqCst)
    }

    /// Makes every confirmation report a reverted transaction.
    pub fn revert(&self) {
        self.inner.revert.store(true, Ordering::SeqCst);
    }

    /// Makes every submission fail the way a declined signature prompt does.
    pub fn reject_send(&self) {
        self.inner.reject_send.store(true, Ordering::SeqCst);
    }

    /// Makes confirmations wait for [`MockContract::release`].
    pub fn hold_confirmation(&self) {
        self.inner.hold_confirmation.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.inner.release.notify_one();
    }

    pub fn is_listened_to(&self) -> bool {
        self.inner
            .listener
            .lock()
            .as_ref()
            .is_some_and(|tx| !tx.is_closed())
    }

    /// Emits a minted event to the current listener, returning whether anyone received it.
    pub fn emit(&self, from: Address, token_id: u64) -> bool {
        let event = MintedEvent {
            from,
            token_id: U256::from(token_id),
        };
        match self.inner.listener.lock().as_ref() {
            Some(tx) => tx.unbounded_send(event).is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl NftContract for MockContract {
    fn address(&self) -> Address {
        *self.inner.bound.lock()
    }

    async fn mint(&self, _from: Address) -> Result<TxHash, ContractError> {
        if self.inner.reject_send.load(Ordering::SeqCst) {
            return Err(ContractError::Rpc(RpcError::ErrorResp(ErrorPayload {
                code: 4001,
                message: "User denied transaction signature.".into(),
                data: None,
            })));
        }
        let n = self.inner.mints.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(TxHash::with_last_byte(n as u8))
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<MintReceipt, ContractError> {
        if self.inner.hold_confirmation.load(Ordering::SeqCst) {
            self.inner.release.notified().await;
        }
        if self.inner.revert.load(Ordering::SeqCst) {
            return Err(ContractError::Reverted { tx_hash });
        }
        Ok(MintReceipt {
            tx_hash,
            block_number: Some(1),
            gas_used: 90_000,
        })
    }

    async fn total_minted(&self) -> Result<u64, ContractError> {
        self.inner.count_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.total_minted)
    }

    async fn minted_events(&self) -> Result<MintedEvents, ContractError> {
        let (tx, rx) = mpsc::unbounded();
        *self.inner.listener.lock() = Some(tx);
        Ok(rx.boxed())
    }
}
