//! Shared test helpers: independent reference implementation and invariant checks

use primecache::PrimeCache;

/// Reference primality test: division by every integer up to sqrt(n).
pub fn brute_force_is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Assert the cache's stored primes are sorted, unique, all prime, and that
/// every prime up to the frontier is present.
pub fn assert_cache_invariants(cache: &PrimeCache) {
    let known = cache.known();
    assert!(
        known.windows(2).all(|w| w[0] < w[1]),
        "known primes not strictly increasing"
    );
    for &p in known {
        assert!(brute_force_is_prime(p as i64), "{p} stored but not prime");
    }

    let frontier = cache.frontier();
    let expected: Vec<u64> = (2..=frontier as i64)
        .filter(|&n| brute_force_is_prime(n))
        .map(|n| n as u64)
        .collect();
    let prefix: Vec<u64> = known.iter().copied().filter(|&p| p <= frontier).collect();
    assert_eq!(prefix, expected, "prefix up to frontier {frontier} incomplete");
}
