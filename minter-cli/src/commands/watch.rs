// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::WalletArgs, error::MinterCliResult, utils::print_page};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    wallet: WalletArgs,
}

/// Reprints the page on every state change until Ctrl-C.
pub async fn exec(args: Args) -> MinterCliResult {
    let controller = args.wallet.controller().await?;
    let mut state = controller.watch_state();
    controller.start().await;
    print_page(&controller.page());

    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                print_page(&controller.page());
            }
            interrupted = tokio::signal::ctrl_c() => {
                interrupted?;
                break;
            }
        }
    }
    controller.teardown();
    Ok(())
}
