//! Prime knowledge cache.
//!
//! Decides primality by trial division, using only primes the cache has
//! already proven as divisors. The same list of proven primes answers
//! "nth prime" and "primes in range" queries, and grows on demand.
//!
//! ```
//! use primecache::PrimeCache;
//!
//! let mut cache = PrimeCache::new();
//! assert!(cache.is_prime(7919));
//! assert_eq!(cache.nth_prime(10).unwrap(), 29);
//! assert_eq!(cache.primes_in_range(10, 20), vec![11, 13, 17, 19]);
//! ```

pub mod cache;
pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod shared;
pub mod stats;

pub use cache::{PrimeCache, SEED_PRIMES};
pub use error::PrimeError;
pub use shared::SharedPrimeCache;
pub use stats::StatsSnapshot;
