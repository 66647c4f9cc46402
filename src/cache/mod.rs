//! Prime knowledge cache.
//!
//! The cache owns a sorted, duplicate-free list of proven primes. The list
//! serves as the divisor set for trial division. It also answers
//! enumeration queries.
//!
//! # Completeness frontier
//!
//! Trial division by known primes up to `isqrt(n)` is only sound if no prime
//! in that interval is missing. The cache therefore tracks a `frontier`.
//! Every prime `<= frontier` is stored. Primes proven by [`PrimeCache::is_prime`]
//! above the frontier are stored too (sorted insert), but they never move the
//! frontier. Only [`PrimeCache::expand_to`] and the sequential walk in
//! [`PrimeCache::nth_prime`] do that, because both test every odd candidate
//! in order.
//!
//! Growth uses two separate primitives. `divides_any` is a pure test
//! against the current knowledge. `expand_to` is the only grower and calls
//! only the pure test, so expansion never recurses.

use std::time::Instant;
use tracing::{debug, info, trace};

use crate::error::{PrimeError, Result};
use crate::stats::{StatsSnapshot, UsageStats};

/// Primes the cache starts with.
pub const SEED_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Largest seed prime; the initial completeness frontier.
const SEED_FRONTIER: u64 = SEED_PRIMES[SEED_PRIMES.len() - 1];

/// Incrementally growing cache of proven primes.
#[derive(Debug, Clone)]
pub struct PrimeCache {
    known: Vec<u64>,
    frontier: u64,
    stats: UsageStats,
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeCache {
    /// Create a cache holding only the seed primes.
    pub fn new() -> Self {
        Self {
            known: SEED_PRIMES.to_vec(),
            frontier: SEED_FRONTIER,
            stats: UsageStats::default(),
        }
    }

    /// Create a cache that already knows every prime up to `bound`.
    pub fn with_preload(bound: u64) -> Self {
        let mut cache = Self::new();
        cache.expand_to(bound);
        info!(
            bound,
            known = cache.known.len(),
            frontier = cache.frontier,
            "Preloaded prime cache"
        );
        cache
    }

    /// Decide whether `n` is prime.
    ///
    /// Values below 2 (including negatives) are never prime. A prime answer
    /// is recorded in the cache.
    pub fn is_prime(&mut self, n: i64) -> bool {
        // Negatives map to 0, which classifies as "not prime".
        self.check(u64::try_from(n).unwrap_or(0))
    }

    /// Return the `n`-th prime, 1-indexed (`nth_prime(1) == 2`).
    pub fn nth_prime(&mut self, n: i64) -> Result<u64> {
        if n < 1 {
            return Err(PrimeError::InvalidArgument { index: n });
        }
        let index =
            usize::try_from(n - 1).map_err(|_| PrimeError::InvalidArgument { index: n })?;

        let mut candidate = self.frontier + 2;
        while self.complete_len() <= index {
            candidate = candidate.max(self.frontier + 2);
            // Every odd number between the frontier and `candidate` has
            // already been rejected, so a prime here is the next prime.
            if self.check(candidate) {
                self.frontier = self.frontier.max(candidate);
            }
            candidate += 2;
        }

        Ok(self.known[index])
    }

    /// Return every prime in `[max(2, lo), hi]`, ascending.
    ///
    /// A reversed range yields an empty list.
    pub fn primes_in_range(&mut self, lo: i64, hi: i64) -> Vec<u64> {
        let lo = lo.max(2);
        if hi < lo {
            return Vec::new();
        }
        (lo..=hi)
            .filter(|&n| self.is_prime(n))
            .map(|n| n.unsigned_abs())
            .collect()
    }

    /// Every prime stored so far, ascending.
    pub fn known(&self) -> &[u64] {
        &self.known
    }

    /// Largest stored prime.
    pub fn largest(&self) -> u64 {
        self.known.last().copied().unwrap_or(SEED_FRONTIER)
    }

    /// Bound below which every prime is guaranteed to be stored.
    pub fn frontier(&self) -> u64 {
        self.frontier
    }

    /// Snapshot of usage counters and cache size.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            processed: self.stats.processed(),
            found: self.stats.found(),
            elapsed: self.stats.elapsed(),
            known: self.known.len(),
            largest: self.largest(),
            frontier: self.frontier,
        }
    }

    /// Timed, counted primality check.
    fn check(&mut self, n: u64) -> bool {
        let started = Instant::now();
        let prime = self.classify(n);
        self.stats.record(prime, started.elapsed());
        prime
    }

    fn classify(&mut self, n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 || n % 3 == 0 {
            return n == 3;
        }
        if SEED_PRIMES.binary_search(&n).is_ok() {
            return true;
        }

        let limit = n.isqrt();
        if limit > self.frontier {
            self.expand_to(limit);
        }
        if self.divides_any(n, limit) {
            return false;
        }

        if self.insert(n) {
            trace!(prime = n, "Recorded prime");
        }
        true
    }

    /// Grow the cache until the frontier reaches `limit`.
    ///
    /// Candidates are tested in increasing order, so when `candidate` is
    /// tested every prime below it is already stored.
    fn expand_to(&mut self, limit: u64) {
        if limit <= self.frontier {
            return;
        }
        let start = self.frontier;
        let before = self.known.len();

        let mut candidate = self.frontier + 2;
        while self.frontier < limit {
            if !self.divides_any(candidate, candidate.isqrt()) {
                self.insert(candidate);
                self.frontier = candidate;
            }
            candidate += 2;
        }

        debug!(
            limit,
            from = start,
            frontier = self.frontier,
            added = self.known.len() - before,
            "Expanded prime cache"
        );
    }

    /// Whether any stored prime `<= limit` divides `n`.
    ///
    /// Callers must ensure `limit <= frontier`. Never grows the cache.
    fn divides_any(&self, n: u64, limit: u64) -> bool {
        debug_assert!(limit <= self.frontier);
        self.known
            .iter()
            .take_while(|&&p| p <= limit)
            .any(|&p| n % p == 0)
    }

    /// Sorted, duplicate-free insert. Returns `false` if already present.
    fn insert(&mut self, prime: u64) -> bool {
        match self.known.binary_search(&prime) {
            Ok(_) => false,
            Err(pos) => {
                self.known.insert(pos, prime);
                true
            }
        }
    }

    /// Number of stored primes that lie within the complete prefix.
    fn complete_len(&self) -> usize {
        self.known.partition_point(|&p| p <= self.frontier)
    }
}
