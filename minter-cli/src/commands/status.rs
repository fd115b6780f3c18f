// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::WalletArgs, error::MinterCliResult, utils::print_page};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    wallet: WalletArgs,
}

pub async fn exec(args: Args) -> MinterCliResult {
    let controller = args.wallet.controller().await?;
    controller.start().await;
    print_page(&controller.page());
    Ok(())
}
