// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::ConfigArgs, error::MinterCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> MinterCliResult {
    let config = args.config.config()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
