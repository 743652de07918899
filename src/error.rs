//! Error types for mdpad operations.

use thiserror::Error;

/// Errors that can occur during workspace or session operations.
///
/// Rendering has no error channel: [`crate::render`] is total over all
/// string inputs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("no file with id {0}")]
    UnknownFile(u64),

    #[error("a workspace must keep at least one file")]
    LastFile,
}

pub type Result<T> = std::result::Result<T, Error>;
