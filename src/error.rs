//! Error types for prime cache queries.

use thiserror::Error;

/// Errors reported by [`PrimeCache`](crate::cache::PrimeCache) operations.
///
/// Only index-based queries can fail; primality checks and range scans
/// always produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrimeError {
    /// `nth_prime` was asked for a position below 1.
    #[error("Invalid argument: prime index must be >= 1, got {index}")]
    InvalidArgument { index: i64 },
}

pub type Result<T> = std::result::Result<T, PrimeError>;
