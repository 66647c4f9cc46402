//! Integration tests for primecache
//!
//! These tests exercise the public cache API against a brute-force reference
//! and drive the CLI binary end to end.

pub mod cli;
pub mod helpers;
pub mod invariants;
