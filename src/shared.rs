//! Thread-safe handle to a single prime cache.
//!
//! Each query holds the lock for its whole duration. Expansion and insertion
//! are not atomic on their own, so locking individual reads and writes would
//! let two callers race on expansion.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cache::PrimeCache;
use crate::error::Result;
use crate::stats::StatsSnapshot;

/// Cloneable handle sharing one [`PrimeCache`] between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedPrimeCache {
    inner: Arc<Mutex<PrimeCache>>,
}

impl SharedPrimeCache {
    pub fn new(cache: PrimeCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    pub fn is_prime(&self, n: i64) -> bool {
        self.lock().is_prime(n)
    }

    pub fn nth_prime(&self, n: i64) -> Result<u64> {
        self.lock().nth_prime(n)
    }

    pub fn primes_in_range(&self, lo: i64, hi: i64) -> Vec<u64> {
        self.lock().primes_in_range(lo, hi)
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.lock().stats()
    }

    /// Copy of the stored primes, ascending.
    pub fn known(&self) -> Vec<u64> {
        self.lock().known().to_vec()
    }

    fn lock(&self) -> MutexGuard<'_, PrimeCache> {
        // The cache is only mutated through single Vec inserts after a value
        // is proven prime, so a poisoned guard still holds a valid cache.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
