// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod contract;
pub mod marketplace;
pub mod network;
pub mod provider;
pub mod state;
pub mod subscription;
pub mod wallet;
