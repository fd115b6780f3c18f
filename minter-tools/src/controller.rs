// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The mint controller.
//!
//! Each public flow catches its own errors and logs them, so callers only ever observe the
//! resulting [`MintState`]. The two conditions a user can act on, a missing wallet and a wrong
//! network, are additionally raised as an [`Alert`].

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use alloy::primitives::Address;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::{
    config::MinterConfig,
    core::{
        contract::{ContractError, MintReceipt, NftContract},
        marketplace::{self, Marketplace},
        network::{current_chain_id, ChainId},
        state::{Alert, InFlight, MintState},
        subscription::Subscription,
        wallet::{Wallet, WalletError},
    },
    utils::{color::DebugColor, format_gas},
    view::{render, Page},
};

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("{0}")]
    Wallet(#[from] WalletError),

    #[error("wallet is on chain {actual}, expected {expected}")]
    WrongNetwork { expected: ChainId, actual: ChainId },
}

#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("{0}")]
    Contract(#[from] ContractError),

    #[error("no account connected, connect a wallet first")]
    NotConnected,
}

pub struct MintController<W> {
    config: MinterConfig,
    wallet: Option<W>,
    state: Arc<watch::Sender<MintState>>,
    subscription: Mutex<Option<Subscription>>,
    started: AtomicBool,
}

impl<W: Wallet> MintController<W> {
    /// Creates a controller with empty state. `wallet` is `None` when no provider was found.
    pub fn new(config: MinterConfig, wallet: Option<W>) -> Self {
        let (state, _) = watch::channel(MintState::default());
        Self {
            config,
            wallet,
            state: Arc::new(state),
            subscription: Mutex::new(None),
            started: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &MinterConfig {
        &self.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> MintState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn watch_state(&self) -> watch::Receiver<MintState> {
        self.state.subscribe()
    }

    pub fn page(&self) -> Page {
        render(&self.state.borrow(), &self.config)
    }

    pub fn is_listening(&self) -> bool {
        self.subscription
            .lock()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Runs the passive connection check, then sets up the event listener and reads the minted
    /// count. Only the first call does anything.
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!(@yellow, "controller already started");
            return;
        }
        self.check_if_wallet_is_connected().await;
        self.setup_event_listener().await;
    }

    /// Stops the event listener.
    pub fn teardown(&self) {
        if self.subscription.lock().take().is_some() {
            debug!(@grey, "stopped minted event listener");
        }
    }

    /// Adopts an already authorized account without prompting the user.
    pub async fn check_if_wallet_is_connected(&self) {
        let Some(wallet) = &self.wallet else {
            info!(@grey, "Make sure you have a wallet!");
            return;
        };
        debug!(@grey, "We have the wallet object");

        match self.authorized_account(wallet).await {
            Ok(Some(account)) => {
                info!(@grey, "Found an authorized account: {}", account.debug_lavender());
                self.state.send_modify(|state| state.account = Some(account));
            }
            Ok(None) => info!(@grey, "No authorized account found"),
            Err(err) => error!(@red, "{err}"),
        }
    }

    async fn authorized_account(&self, wallet: &W) -> Result<Option<Address>, WalletError> {
        let accounts = wallet.accounts().await?;
        let chain_id = current_chain_id(wallet).await?;
        if !self.config.network_guard().is_expected(&chain_id) {
            return Ok(None);
        }
        Ok(accounts.first().copied())
    }

    /// Asks the wallet to authorize an account and stores it if the wallet is on the expected
    /// network. Returns the connected account.
    pub async fn connect_wallet(&self) -> Option<Address> {
        let Some(wallet) = &self.wallet else {
            self.raise(Alert::MissingWallet);
            return None;
        };

        match self.try_connect(wallet).await {
            Ok(account) => {
                self.state.send_modify(|state| {
                    state.account = Some(account);
                    state.alert = None;
                });
                Some(account)
            }
            Err(ConnectError::WrongNetwork { expected, actual }) => {
                self.raise(Alert::WrongNetwork { expected, actual });
                None
            }
            Err(err) => {
                error!(@red, "{err}");
                None
            }
        }
    }

    async fn try_connect(&self, wallet: &W) -> Result<Address, ConnectError> {
        let accounts = wallet.request_accounts().await?;
        let account = *accounts.first().ok_or(WalletError::NoAccounts)?;
        info!(@grey, "Connected {}", account.debug_lavender());

        let actual = current_chain_id(wallet).await?;
        let guard = self.config.network_guard();
        if !guard.is_expected(&actual) {
            return Err(ConnectError::WrongNetwork {
                expected: guard.expected().clone(),
                actual,
            });
        }
        Ok(account)
    }

    fn raise(&self, alert: Alert) {
        warn!(@yellow, "{alert}");
        self.state.send_modify(|state| state.alert = Some(alert));
    }

    /// Sends the mint transaction from the connected account and waits for it to be mined.
    ///
    /// `minting` is held up from the moment this is called until it returns or is dropped.
    pub async fn mint(&self) -> Option<MintReceipt> {
        let Some(wallet) = &self.wallet else {
            info!(@grey, "Wallet object doesn't exist!");
            return None;
        };

        let _in_flight = InFlight::begin(&self.state);
        match self.try_mint(wallet).await {
            Ok(receipt) => Some(receipt),
            Err(err) => {
                error!(@red, "{err}");
                None
            }
        }
    }

    async fn try_mint(&self, wallet: &W) -> Result<MintReceipt, MintError> {
        let from = self.state.borrow().account.ok_or(MintError::NotConnected)?;
        let contract = wallet.contract(self.config.contract_address);

        info!(@grey, "Going to pop wallet now to pay gas...");
        let tx_hash = contract.mint(from).await?;

        info!(@grey, "Mining...please wait.");
        let receipt = contract.confirm(tx_hash).await?;

        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used));
        info!(@grey, "Mined, see transaction: {}", marketplace::tx_link(&self.config, tx_hash));
        Ok(receipt)
    }

    /// Listens for minted events for the rest of the controller's life and reads the minted
    /// count once.
    pub async fn setup_event_listener(&self) {
        let Some(wallet) = &self.wallet else {
            info!(@grey, "Wallet object doesn't exist!");
            return;
        };

        match self.try_setup_event_listener(wallet).await {
            Ok(()) => info!(@grey, "Setup event listener!"),
            Err(err) => error!(@red, "{err}"),
        }
    }

    async fn try_setup_event_listener(&self, wallet: &W) -> Result<(), ContractError> {
        let contract = wallet.contract(self.config.contract_address);
        debug!(@grey, "listening for mints on {}", contract.address().debug_lavender());
        let events = contract.minted_events().await?;

        let marketplace = Marketplace::new(&self.config);
        let state = self.state.clone();
        let subscription = Subscription::spawn(events, move |event| {
            info!(@grey, "{} minted token {}", event.from.debug_lavender(), event.token_id);
            let link = marketplace.asset_link(event.token_id);
            state.send_modify(|state| state.marketplace_link = Some(link));
        });
        *self.subscription.lock() = Some(subscription);

        let count = contract.total_minted().await?;
        self.state.send_modify(|state| state.minted_count = count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use alloy::primitives::TxHash;
    use tokio::time::timeout;

    use super::*;
    use crate::utils::testing::{MockContract, MockWallet, ALICE};

    fn controller(wallet: Option<MockWallet>) -> MintController<MockWallet> {
        MintController::new(MinterConfig::default(), wallet)
    }

    async fn wait_for(
        rx: &mut watch::Receiver<MintState>,
        f: impl FnMut(&MintState) -> bool,
    ) -> eyre::Result<()> {
        timeout(Duration::from_secs(5), rx.wait_for(f)).await??;
        Ok(())
    }

    #[tokio::test]
    async fn missing_wallet_is_a_quiet_no_op() {
        let controller = controller(None);
        controller.start().await;
        assert_eq!(controller.connect_wallet().await, None);
        assert_eq!(controller.mint().await, None);

        let state = controller.state();
        assert_eq!(state.account, None);
        assert!(!state.minting);
        assert_eq!(state.alert, Some(Alert::MissingWallet));
        assert!(!controller.is_listening());
    }

    #[tokio::test]
    async fn passive_check_adopts_authorized_account() {
        let controller = controller(Some(MockWallet::new()));
        controller.check_if_wallet_is_connected().await;
        assert_eq!(controller.state().account, Some(ALICE));
        assert_eq!(controller.state().alert, None);
    }

    #[tokio::test]
    async fn passive_check_ignores_accounts_on_wrong_network() {
        let controller = controller(Some(MockWallet::new().on_chain(1u64)));
        controller.check_if_wallet_is_connected().await;
        assert_eq!(controller.state().account, None);
        // passive checks never alert
        assert_eq!(controller.state().alert, None);
    }

    #[tokio::test]
    async fn passive_check_without_accounts() {
        let controller = controller(Some(MockWallet::new().without_accounts()));
        controller.check_if_wallet_is_connected().await;
        assert_eq!(controller.state().account, None);
    }

    #[tokio::test]
    async fn connect_stores_account() {
        let controller = controller(Some(MockWallet::new().without_accounts()));
        assert_eq!(controller.connect_wallet().await, Some(ALICE));
        assert_eq!(controller.state().account, Some(ALICE));
    }

    #[tokio::test]
    async fn connect_on_wrong_network_alerts_and_stays_disconnected() {
        let wallet = MockWallet::new().on_chain(1u64);
        let contract = wallet.contract.clone();
        let controller = controller(Some(wallet));

        assert_eq!(controller.connect_wallet().await, None);
        let state = controller.state();
        assert_eq!(state.account, None);
        assert_eq!(
            state.alert,
            Some(Alert::WrongNetwork {
                expected: "0x4".into(),
                actual: "0x1".into(),
            })
        );

        // the rejected account cannot be used to mint
        assert_eq!(controller.mint().await, None);
        assert_eq!(contract.mints(), 0);
    }

    #[tokio::test]
    async fn rejected_request_leaves_identity_unset() {
        let controller = controller(Some(MockWallet::new().rejecting()));
        assert_eq!(controller.connect_wallet().await, None);
        assert_eq!(controller.state().account, None);
        assert_eq!(controller.state().alert, None);
    }

    #[tokio::test]
    async fn successful_connect_clears_alert() {
        let controller = controller(Some(MockWallet::new()));
        controller.raise(Alert::MissingWallet);
        controller.connect_wallet().await;
        assert_eq!(controller.state().alert, None);
    }

    #[tokio::test]
    async fn mint_holds_flag_until_confirmed() -> eyre::Result<()> {
        let wallet = MockWallet::new();
        let contract = wallet.contract.clone();
        contract.hold_confirmation();
        let controller = controller(Some(wallet));
        controller.connect_wallet().await;

        let mut rx = controller.watch_state();
        let observe = async {
            wait_for(&mut rx, |state| state.minting).await?;
            contract.release();
            eyre::Ok(())
        };
        let (receipt, observed) = tokio::join!(controller.mint(), observe);
        observed?;

        let receipt = receipt.expect("mint succeeds");
        assert_eq!(receipt.tx_hash, TxHash::with_last_byte(1));
        assert!(!controller.state().minting);
        assert_eq!(contract.mints(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn mint_resets_flag_on_revert() {
        let wallet = MockWallet::new();
        wallet.contract.revert();
        let controller = controller(Some(wallet));
        controller.connect_wallet().await;

        let rx = controller.watch_state();
        assert_eq!(controller.mint().await, None);
        assert!(!controller.state().minting);
        // flag went up and back down
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn mint_resets_flag_when_send_is_declined() {
        let wallet = MockWallet::new();
        let contract = wallet.contract.clone();
        contract.reject_send();
        let controller = controller(Some(wallet));
        controller.connect_wallet().await;

        let rx = controller.watch_state();
        assert_eq!(controller.mint().await, None);
        assert!(!controller.state().minting);
        assert!(rx.has_changed().unwrap());
        assert_eq!(contract.mints(), 0);
    }

    #[tokio::test]
    async fn dropped_mint_resets_flag() {
        let wallet = MockWallet::new();
        wallet.contract.hold_confirmation();
        let controller = controller(Some(wallet));
        controller.connect_wallet().await;

        let result = timeout(Duration::from_millis(50), controller.mint()).await;
        assert!(result.is_err());
        assert!(!controller.state().minting);
    }

    #[tokio::test]
    async fn minted_event_sets_marketplace_link() -> eyre::Result<()> {
        let wallet = MockWallet::new();
        let contract = wallet.contract.clone();
        let controller = controller(Some(wallet));
        controller.start().await;
        assert!(controller.is_listening());

        let marketplace = Marketplace::new(controller.config());
        let mut rx = controller.watch_state();
        for token_id in [3, 7] {
            assert!(contract.emit(ALICE, token_id));
            let expected = format!("{}{token_id}", marketplace.asset_base());
            wait_for(&mut rx, |state| {
                state.marketplace_link.as_deref() == Some(expected.as_str())
            })
            .await?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn minted_count_is_read_once() {
        let wallet = MockWallet {
            contract: MockContract::with_total_minted(12),
            ..MockWallet::new()
        };
        let contract = wallet.contract.clone();
        let controller = controller(Some(wallet));

        controller.start().await;
        controller.start().await;
        assert_eq!(controller.state().minted_count, 12);

        controller.mint().await.expect("mint succeeds");
        assert_eq!(controller.state().minted_count, 12);
        assert_eq!(contract.count_reads(), 1);
    }

    #[tokio::test]
    async fn teardown_stops_listener() {
        let wallet = MockWallet::new();
        let contract = wallet.contract.clone();
        let controller = controller(Some(wallet));
        controller.setup_event_listener().await;
        assert!(controller.is_listening());
        assert_eq!(contract.address(), controller.config().contract_address);

        controller.teardown();
        assert!(!controller.is_listening());
        for _ in 0..100 {
            if !contract.is_listened_to() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(!contract.emit(ALICE, 1));
    }
}
