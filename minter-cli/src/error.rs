// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type MinterCliResult = Result<(), MinterCliError>;

/// Exit code for flows that ran but did not reach their goal, e.g. a reverted mint.
pub const EXIT_INCOMPLETE: u8 = 2;

#[derive(Debug)]
pub struct MinterCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl MinterCliError {
    pub fn incomplete(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::from(EXIT_INCOMPLETE),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for MinterCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for MinterCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for MinterCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<minter_tools::Error> for MinterCliError {
    fn from(err: minter_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
