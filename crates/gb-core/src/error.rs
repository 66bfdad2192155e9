//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `GbError`
//! via `From` impls or keep them separate.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `gb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GbError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gb-*` crates.
pub type GbResult<T> = Result<T, GbError>;
