//! Range command - all primes in an inclusive interval

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{finish, heading, Report};
use crate::cache::PrimeCache;
use crate::config::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub lo: i64,
    pub hi: i64,
    pub primes: Vec<u64>,
}

impl Report for RangeReport {
    fn render_text(&self) -> String {
        let title = format!("Primes between {} and {}", self.lo, self.hi);
        let body = if self.primes.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            let list: Vec<String> = self.primes.iter().map(u64::to_string).collect();
            format!("{} ({} found)", list.join(", "), self.primes.len())
        };
        format!("{}\n{body}", heading(&title))
    }
}

pub fn run(cache: &mut PrimeCache, lo: i64, hi: i64) -> RangeReport {
    RangeReport {
        lo,
        hi,
        primes: cache.primes_in_range(lo, hi),
    }
}

/// Execute the range command
pub fn execute(
    cache: &mut PrimeCache,
    lo: i64,
    hi: i64,
    show_stats: bool,
    format: OutputFormat,
) -> Result<()> {
    let report = run(cache, lo, hi);
    finish(report, cache, show_stats, format)
}
