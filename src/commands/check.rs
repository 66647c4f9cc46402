//! Check command - primality of individual numbers

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{finish, heading, Report};
use crate::cache::PrimeCache;
use crate::config::OutputFormat;

/// Verdict for a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    pub number: i64,
    pub prime: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckEntry>,
}

impl Report for CheckReport {
    fn render_text(&self) -> String {
        let mut lines = vec![heading("Primality")];
        lines.extend(self.results.iter().map(|entry| {
            let verdict = if entry.prime {
                "prime".green().bold()
            } else {
                "composite".dimmed()
            };
            format!("{:>9}  {verdict}", entry.number)
        }));
        lines.join("\n")
    }
}

/// Classify each number, in input order.
pub fn run(cache: &mut PrimeCache, numbers: &[i64]) -> CheckReport {
    CheckReport {
        results: numbers
            .iter()
            .map(|&number| CheckEntry {
                number,
                prime: cache.is_prime(number),
            })
            .collect(),
    }
}

/// Execute the check command
pub fn execute(
    cache: &mut PrimeCache,
    numbers: &[i64],
    show_stats: bool,
    format: OutputFormat,
) -> Result<()> {
    let report = run(cache, numbers);
    finish(report, cache, show_stats, format)
}
