//! Demo command - walk through every cache operation with fixed inputs

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::check::{self, CheckReport};
use super::nth::{self, NthReport};
use super::range::{self, RangeReport};
use super::{finish, heading, Report};
use crate::cache::{PrimeCache, SEED_PRIMES};
use crate::config::OutputFormat;
use crate::stats::StatsSnapshot;

/// Numbers classified in the primality section.
pub const DEMO_NUMBERS: [i64; 9] = [2, 3, 17, 121, 143, 187, 7919, 104729, 999983];

/// How many leading primes are listed.
pub const DEMO_FIRST: i64 = 20;

/// Interval scanned in the range section.
pub const DEMO_RANGE: (i64, i64) = (100, 150);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub checks: CheckReport,
    pub first_primes: Vec<NthReport>,
    pub range: RangeReport,
    pub stats: StatsSnapshot,
    pub seed: Vec<u64>,
}

impl Report for DemoReport {
    fn render_text(&self) -> String {
        let first: Vec<String> = self.first_primes.iter().map(Report::render_text).collect();
        let seed: Vec<String> = self.seed.iter().map(u64::to_string).collect();

        [
            self.checks.render_text(),
            String::new(),
            heading(&format!("First {} primes", self.first_primes.len())),
            first.join("\n"),
            String::new(),
            self.range.render_text(),
            String::new(),
            self.stats.render_text(),
            String::new(),
            heading("Cache"),
            format!("Seed primes: [{}]", seed.join(", ")),
            format!("Primes stored: {}", self.stats.known),
            format!("Largest known prime: {}", self.stats.largest),
            String::new(),
            format!("{} all checks done", "✓".green().bold()),
        ]
        .join("\n")
    }
}

pub fn run(cache: &mut PrimeCache) -> Result<DemoReport> {
    let checks = check::run(cache, &DEMO_NUMBERS);
    let first_primes = (1..=DEMO_FIRST)
        .map(|index| nth::run(cache, index))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to enumerate leading primes")?;
    let range = range::run(cache, DEMO_RANGE.0, DEMO_RANGE.1);

    Ok(DemoReport {
        checks,
        first_primes,
        range,
        stats: cache.stats(),
        seed: SEED_PRIMES.to_vec(),
    })
}

/// Execute the demo command
pub fn execute(cache: &mut PrimeCache, show_stats: bool, format: OutputFormat) -> Result<()> {
    let report = run(cache)?;
    finish(report, cache, show_stats, format)
}
