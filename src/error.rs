use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("snapshot file not found: {0}")]
    SnapshotNotFound(PathBuf),
    #[error("failed to parse snapshot: {0}")]
    Parse(String),
    #[error("amount for {address} is not a base-16 integer: {value:?}")]
    InvalidAmount { address: String, value: String },
    #[error("total airdrop is zero across {0} recipients")]
    ZeroTotal(usize),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
