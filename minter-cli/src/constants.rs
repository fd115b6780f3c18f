// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a local node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// How long `mint` waits for the minted event after the transaction is mined.
pub const DEFAULT_EVENT_WAIT_SECS: u64 = 60;
