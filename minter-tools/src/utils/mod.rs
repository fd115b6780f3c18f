// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use color::Color;

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Pretty-prints an amount of gas, colored by how expensive it is.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 150_000 {
        text.mint()
    } else if gas <= 500_000 {
        text.yellow()
    } else {
        text.pink()
    }
}
