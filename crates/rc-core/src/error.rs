//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where a core check (e.g. config validation) can fail.

use thiserror::Error;

/// Errors raised by `rc-core` primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
