//! Property tests: cache answers never depend on query history

use primecache::PrimeCache;
use proptest::prelude::*;

use super::helpers::{assert_cache_invariants, brute_force_is_prime};

#[derive(Debug, Clone)]
enum Query {
    IsPrime(i64),
    Nth(i64),
    Range(i64, i64),
}

fn query() -> impl Strategy<Value = Query> {
    prop_oneof![
        (-100i64..2_000_000).prop_map(Query::IsPrime),
        (1i64..400).prop_map(Query::Nth),
        (-50i64..20_000, 0i64..200).prop_map(|(lo, len)| Query::Range(lo, lo + len)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn is_prime_matches_reference(n in -1000i64..5_000_000) {
        let mut cache = PrimeCache::new();
        prop_assert_eq!(cache.is_prime(n), brute_force_is_prime(n));
    }

    #[test]
    fn is_prime_is_idempotent(n in 0i64..2_000_000) {
        let mut cache = PrimeCache::new();
        let first = cache.is_prime(n);
        prop_assert_eq!(cache.is_prime(n), first);
    }

    #[test]
    fn query_history_does_not_change_answers(
        queries in prop::collection::vec(query(), 1..12),
        probe in 2i64..200_000,
    ) {
        let mut cache = PrimeCache::new();
        for q in &queries {
            match *q {
                Query::IsPrime(n) => {
                    prop_assert_eq!(cache.is_prime(n), brute_force_is_prime(n));
                }
                Query::Nth(n) => {
                    let p = cache.nth_prime(n).unwrap();
                    prop_assert!(brute_force_is_prime(p as i64));
                }
                Query::Range(lo, hi) => {
                    let expected: Vec<u64> = (lo.max(2)..=hi)
                        .filter(|&n| brute_force_is_prime(n))
                        .map(|n| n as u64)
                        .collect();
                    prop_assert_eq!(cache.primes_in_range(lo, hi), expected);
                }
            }
        }
        prop_assert_eq!(cache.is_prime(probe), brute_force_is_prime(probe));
        assert_cache_invariants(&cache);
    }
}
