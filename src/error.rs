use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
