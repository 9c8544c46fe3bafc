//! Compare command: run every strategy over one file

use crate::output;
use anyhow::{bail, Context, Result};
use colored::*;
use compstrat::registry;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct ComparisonRow {
    id: u8,
    algorithm: &'static str,
    compressed_size: usize,
    ratio: f64,
    compress_ms: f64,
    decompress_ms: f64,
    round_trip: bool,
}

#[derive(Serialize)]
struct Comparison {
    input: String,
    input_size: usize,
    results: Vec<ComparisonRow>,
}

/// Compress `input` with every registered algorithm and report sizes and timings
pub fn compare(input: &Path) -> Result<()> {
    let data =
        fs::read(input).with_context(|| format!("Failed to read input: {}", input.display()))?;
    let opts = output::options()?;
    let strategies = registry();

    let pb = if opts.quiet || output::is_json()? {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(strategies.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut results = Vec::with_capacity(strategies.len());
    for strategy in strategies.strategies() {
        let algorithm = strategy.algorithm();
        pb.set_message(algorithm.name());

        let started = Instant::now();
        let compressed = strategy
            .compress(&data)
            .with_context(|| format!("{} failed to compress {}", algorithm, input.display()))?;
        let compress_ms = started.elapsed().as_secs_f64() * 1000.0;

        let started = Instant::now();
        let restored = strategy
            .decompress(&compressed)
            .with_context(|| format!("{} failed to decompress its own output", algorithm))?;
        let decompress_ms = started.elapsed().as_secs_f64() * 1000.0;

        // msgpack restores JSON objects semantically, not byte for byte
        let round_trip = restored == data;
        log::debug!(
            "{}: {} -> {} bytes, exact round trip: {}",
            algorithm,
            data.len(),
            compressed.len(),
            round_trip
        );

        results.push(ComparisonRow {
            id: algorithm.id(),
            algorithm: algorithm.name(),
            compressed_size: compressed.len(),
            ratio: output::ratio(data.len(), compressed.len()),
            compress_ms,
            decompress_ms,
            round_trip,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    if results.is_empty() {
        bail!("No algorithms registered");
    }

    let comparison = Comparison {
        input: input.display().to_string(),
        input_size: data.len(),
        results,
    };

    if output::is_json()? {
        return output::print_json(&comparison);
    }

    print_table(&comparison)
}

fn print_table(comparison: &Comparison) -> Result<()> {
    let color = output::use_color()?;
    let best = comparison
        .results
        .iter()
        .map(|row| row.compressed_size)
        .min()
        .unwrap_or(0);

    output::print_line(&format!(
        "{} ({})",
        comparison.input,
        output::format_size(comparison.input_size)
    ))?;
    output::print_line(&format!(
        "{:>3}  {:<10} {:>12} {:>8} {:>12} {:>12}  {}",
        "ID", "ALGORITHM", "SIZE", "RATIO", "COMPRESS", "DECOMPRESS", "EXACT"
    ))?;

    for row in &comparison.results {
        let line = format!(
            "{:>3}  {:<10} {:>12} {:>7.1}% {:>10.2}ms {:>10.2}ms  {}",
            row.id,
            row.algorithm,
            output::format_size(row.compressed_size),
            row.ratio * 100.0,
            row.compress_ms,
            row.decompress_ms,
            if row.round_trip { "yes" } else { "no" },
        );
        if color && row.compressed_size == best {
            output::print_line(&line.green().to_string())?;
        } else {
            output::print_line(&line)?;
        }
    }
    Ok(())
}
