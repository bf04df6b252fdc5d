//! Error taxonomy shared by every layer of the capture pipeline.
//!
//! Every fallible operation in this crate returns a [`SpectrelError`]; there
//! is no local recovery; each error is propagated to the capture loop, which
//! logs exactly one diagnostic and exits non-zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectrelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("allocation failed: {0}")]
    AllocationFailed(String),

    #[error("SDR failure: {0}")]
    SdrFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported output format: {0}")]
    FormatError(String),
}

pub type Result<T> = std::result::Result<T, SpectrelError>;
