// src/errors.rs
use thiserror::Error;

/// Everything the public surface can fail with.
///
/// Algorithm-internal invariant violations are deliberately *not* here:
/// per design they panic (a selector we rendered ourselves failing to
/// evaluate is a bug, not a caller error).
#[derive(Debug, Error)]
pub enum LocateError {
    /// Neither `html` nor `url` was supplied (empty strings count as absent).
    #[error("no html or url supplied")]
    NoSource,

    /// The blocking fetch failed at the transport level.
    /// Propagated unmodified; never retried.
    #[error(transparent)]
    Fetch(#[from] reqwest::Error),
}
