// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use minter_tools::{
    core::{network::ChainId, provider::RpcWallet},
    MintController, MinterConfig,
};

use crate::{constants::DEFAULT_ENDPOINT, utils::decode0x};

pub type Controller = MintController<RpcWallet<DynProvider>>;

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// Builds the local signer, if any key source was given. Without one, the node's own
    /// accounts are used.
    fn build_signer(&self, chain_id: u64) -> eyre::Result<Option<PrivateKeySigner>> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return Ok(Some(signer_from_hex(key, chain_id)?));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Ok(Some(signer_from_hex(key, chain_id)?));
        }

        let Some(keystore) = &self.keystore_path else {
            return Ok(None);
        };
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(Some(signer))
    }
}

fn signer_from_hex(key: impl AsRef<str>, chain_id: u64) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    let priv_key_bytes = FixedBytes::<32>::try_from(bytes.as_slice())
        .map_err(|_| eyre!("private key must be 32 bytes, got {}", bytes.len()))?;
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id)))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the node the wallet talks to
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_wallet(&self, auth: &AuthArgs) -> eyre::Result<RpcWallet<DynProvider>> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        let Some(signer) = auth.build_signer(chain_id)? else {
            return Ok(RpcWallet::new(provider.erased()));
        };

        let address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect(&self.endpoint)
            .await?;
        Ok(RpcWallet::with_signer(provider.erased(), address))
    }
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// TOML file with minter settings. Flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address of the NFT contract
    #[arg(long)]
    contract: Option<Address>,
    /// Chain id minting is allowed on, in hex (e.g. 0x4)
    #[arg(long, value_parser = parse_chain_id)]
    chain_id: Option<ChainId>,
}

/// Accepts `0x`-prefixed hex only, the form wallets report chain ids in.
fn parse_chain_id(text: &str) -> Result<ChainId, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .ok_or_else(|| format!("chain id must be 0x-prefixed hex, got {text:?}"))?;
    let id = u64::from_str_radix(digits, 16)
        .map_err(|err| format!("invalid chain id {text:?}: {err}"))?;
    Ok(ChainId::from(id))
}

impl ConfigArgs {
    pub fn config(&self) -> eyre::Result<MinterConfig> {
        let mut config = match &self.config {
            Some(path) => MinterConfig::from_file(path)
                .wrap_err_with(|| format!("could not load config {}", path.display()))?,
            None => MinterConfig::default(),
        };
        if let Some(contract) = self.contract {
            config.contract_address = contract;
        }
        if let Some(chain_id) = &self.chain_id {
            config.chain_id = chain_id.clone();
        }
        Ok(config)
    }
}

/// Everything a command needs to reach the contract through a wallet.
#[derive(Debug, clap::Args)]
pub struct WalletArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
    #[command(flatten)]
    pub provider: ProviderArgs,
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl WalletArgs {
    pub async fn controller(&self) -> eyre::Result<Controller> {
        let config = self.config.config()?;
        let wallet = self.provider.build_wallet(&self.auth).await?;
        Ok(MintController::new(config, Some(wallet)))
    }
}
