// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::U256;
use minter_tools::core::marketplace::Marketplace;

use crate::{common_args::ConfigArgs, error::MinterCliResult, utils::print_link};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token id, as emitted by the minted event.
    token_id: U256,

    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> MinterCliResult {
    let config = args.config.config()?;
    let marketplace = Marketplace::new(&config);
    print_link("Asset:", marketplace.asset_link(args.token_id));
    print_link("Collection:", marketplace.collection_link());
    Ok(())
}
