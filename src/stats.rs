//! Usage statistics for the prime cache.
//!
//! Counters are observational only. Nothing in the cache reads them back
//! when deciding primality.

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Running counters updated by every primality check.
#[derive(Debug, Clone, Default)]
pub struct UsageStats {
    processed: u64,
    found: u64,
    elapsed: Duration,
}

impl UsageStats {
    /// Record one finished primality check.
    pub fn record(&mut self, prime: bool, took: Duration) {
        self.processed += 1;
        if prime {
            self.found += 1;
        }
        self.elapsed += took;
    }

    /// Number of primality checks performed.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Number of checks that answered "prime".
    pub fn found(&self) -> u64 {
        self.found
    }

    /// Total wall time spent inside primality checks.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Point-in-time view of the cache counters and knowledge base size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub processed: u64,
    pub found: u64,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Number of primes currently stored.
    pub known: usize,
    /// Largest prime currently stored.
    pub largest: u64,
    /// Bound below which every prime is stored.
    pub frontier: u64,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}
