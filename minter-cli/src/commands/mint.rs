// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use eyre::eyre;

use crate::{
    common_args::WalletArgs,
    constants::DEFAULT_EVENT_WAIT_SECS,
    error::{MinterCliError, MinterCliResult},
    utils::print_page,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Seconds to wait for the minted event once the transaction is mined.
    #[arg(long, default_value_t = DEFAULT_EVENT_WAIT_SECS)]
    wait_secs: u64,

    #[command(flatten)]
    wallet: WalletArgs,
}

pub async fn exec(args: Args) -> MinterCliResult {
    let controller = args.wallet.controller().await?;
    controller.start().await;
    if !controller.state().is_connected() && controller.connect_wallet().await.is_none() {
        print_page(&controller.page());
        return Err(MinterCliError::incomplete(eyre!("no account connected")));
    }

    let mut updates = controller.watch_state();
    let previous_link = controller.state().marketplace_link;
    print_page(&controller.page());

    let Some(receipt) = controller.mint().await else {
        print_page(&controller.page());
        return Err(MinterCliError::incomplete(eyre!("mint failed")));
    };
    log::debug!("mint included in block {:?}", receipt.block_number);

    let wait = Duration::from_secs(args.wait_secs);
    let linked = tokio::time::timeout(wait, async {
        updates
            .wait_for(|state| state.marketplace_link != previous_link)
            .await
            .map(|_| ())
    })
    .await;
    if !matches!(linked, Ok(Ok(()))) {
        log::warn!("no minted event seen within {}s", args.wait_secs);
    }

    print_page(&controller.page());
    controller.teardown();
    Ok(())
}
