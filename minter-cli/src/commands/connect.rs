// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;

use crate::{
    common_args::WalletArgs,
    error::{MinterCliError, MinterCliResult},
    utils::print_page,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    wallet: WalletArgs,
}

pub async fn exec(args: Args) -> MinterCliResult {
    let controller = args.wallet.controller().await?;
    let account = controller.connect_wallet().await;
    print_page(&controller.page());
    match account {
        Some(_) => Ok(()),
        None => Err(MinterCliError::incomplete(eyre!("no account connected"))),
    }
}
