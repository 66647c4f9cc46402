//! Nth command - prime by 1-based position

use anyhow::{Context, Result};
use serde::Serialize;

use super::{finish, Report};
use crate::cache::PrimeCache;
use crate::config::OutputFormat;
use crate::error::PrimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NthReport {
    pub index: i64,
    pub prime: u64,
}

impl Report for NthReport {
    fn render_text(&self) -> String {
        format!("P({:>2}) = {:>3}", self.index, self.prime)
    }
}

pub fn run(cache: &mut PrimeCache, index: i64) -> Result<NthReport, PrimeError> {
    let prime = cache.nth_prime(index)?;
    Ok(NthReport { index, prime })
}

/// Execute the nth command
pub fn execute(
    cache: &mut PrimeCache,
    index: i64,
    show_stats: bool,
    format: OutputFormat,
) -> Result<()> {
    let report =
        run(cache, index).with_context(|| format!("Cannot look up prime number {index}"))?;
    finish(report, cache, show_stats, format)
}
