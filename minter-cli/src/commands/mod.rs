// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::MinterCliResult;

mod config;
mod connect;
mod link;
mod mint;
mod status;
mod watch;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the effective configuration as TOML
    Config(config::Args),
    /// Ask the wallet to authorize an account
    #[clap(visible_alias = "c")]
    Connect(connect::Args),
    /// Print the marketplace links for a token
    Link(link::Args),
    /// Mint an NFT and wait for its marketplace link
    #[clap(visible_alias = "m")]
    Mint(mint::Args),
    /// Show the connected account and how many NFTs were minted
    #[clap(visible_alias = "s")]
    Status(status::Args),
    /// Follow minted events until interrupted
    #[clap(visible_alias = "w")]
    Watch(watch::Args),
}

pub async fn exec(cmd: Command) -> MinterCliResult {
    match cmd {
        Command::Config(args) => config::exec(args),
        Command::Connect(args) => connect::exec(args).await,
        Command::Link(args) => link::exec(args),
        Command::Mint(args) => mint::exec(args).await,
        Command::Status(args) => status::exec(args).await,
        Command::Watch(args) => watch::exec(args).await,
    }
}
