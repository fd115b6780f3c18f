// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use minter_tools::Page;

use style::{BOLD, ERROR, LINK};

mod style;

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(alloy::hex::decode(text)?)
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

pub fn print_page(page: &Page) {
    println!("{page}");
}

pub fn print_link(label: &str, link: impl Display) {
    println!("{BOLD}{label}{BOLD:#} {LINK}{link}{LINK:#}");
}
