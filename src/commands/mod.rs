//! CLI commands built on top of the prime cache.
//!
//! Each command computes a serializable report and then prints it either as
//! text or as JSON.

pub mod check;
pub mod demo;
pub mod nth;
pub mod range;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cache::PrimeCache;
use crate::config::OutputFormat;
use crate::stats::StatsSnapshot;

/// A command result that can be shown to the user.
pub trait Report: Serialize {
    /// Human-readable rendering, one or more lines, no trailing newline.
    fn render_text(&self) -> String;
}

/// Render a report in the requested format.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
        }
    }
}

/// Render a report and print it to stdout.
pub fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
    println!("{}", render(report, format)?);
    Ok(())
}

/// A command report followed by the cache statistics.
///
/// In JSON mode this keeps `--stats` output a single document.
#[derive(Debug, Clone, Serialize)]
pub struct WithStats<R> {
    pub result: R,
    pub stats: StatsSnapshot,
}

impl<R: Report> Report for WithStats<R> {
    fn render_text(&self) -> String {
        format!("{}\n\n{}", self.result.render_text(), self.stats.render_text())
    }
}

/// Print a command report, attaching the cache statistics when requested.
pub fn finish<R: Report>(
    report: R,
    cache: &PrimeCache,
    show_stats: bool,
    format: OutputFormat,
) -> Result<()> {
    if show_stats {
        emit(
            &WithStats {
                result: report,
                stats: cache.stats(),
            },
            format,
        )
    } else {
        emit(&report, format)
    }
}

/// Heading line used by the text renderers.
pub(crate) fn heading(title: &str) -> String {
    format!("{}\n{}", title.bold(), "─".repeat(40).dimmed())
}

impl Report for StatsSnapshot {
    fn render_text(&self) -> String {
        [
            heading("Statistics"),
            format!("Numbers processed: {}", self.processed),
            format!("Primes found:      {}", self.found),
            format!("Total time:        {:.6} s", self.elapsed.as_secs_f64()),
            format!("Primes stored:     {}", self.known),
            format!("Largest known:     {}", self.largest),
            format!("Complete up to:    {}", self.frontier),
        ]
        .join("\n")
    }
}
