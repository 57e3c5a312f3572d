//! Fatal error taxonomy.
//!
//! Only the conditions below abort a run. Everything else (an unreachable
//! wordlist source, a failing executor invocation, a malformed report file)
//! degrades to a warning and fewer results.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuzzError {
    /// The target could not be normalized to a URL with a host.
    #[error("invalid target url '{0}'")]
    InvalidTarget(String),

    /// The probe executor is neither an existing path nor on PATH.
    #[error("probe executor '{0}' not found (install ffuf or pass --ffuf-path)")]
    ExecutorNotFound(String),

    /// Neither a static nor a subdomain wordlist could be made available.
    #[error("no usable wordlist source, nothing to fuzz")]
    NoWordlists,
}
