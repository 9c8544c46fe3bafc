//! Compress and decompress commands

use crate::output;
use anyhow::{Context, Result};
use colored::*;
use compstrat::Algorithm;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct TransformReport {
    operation: &'static str,
    algorithm: &'static str,
    algorithm_id: u8,
    input: String,
    output: String,
    input_size: usize,
    output_size: usize,
    ratio: f64,
}

#[derive(Clone, Copy)]
enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Compress => "compress",
            Direction::Decompress => "decompress",
        }
    }
}

/// Compress `input` into `destination`
pub fn compress(input: &Path, destination: &Path, algorithm: Algorithm) -> Result<()> {
    run(Direction::Compress, input, destination, algorithm)
}

/// Decompress `input` into `destination`
pub fn decompress(input: &Path, destination: &Path, algorithm: Algorithm) -> Result<()> {
    run(Direction::Decompress, input, destination, algorithm)
}

fn run(direction: Direction, input: &Path, destination: &Path, algorithm: Algorithm) -> Result<()> {
    let data =
        fs::read(input).with_context(|| format!("Failed to read input: {}", input.display()))?;
    output::verbose_println(
        1,
        &format!("Read {} bytes from {}", data.len(), input.display()),
    )?;

    let result = match direction {
        Direction::Compress => compstrat::compress(algorithm, &data),
        Direction::Decompress => compstrat::decompress(algorithm, &data),
    }
    .with_context(|| format!("Failed to {} {}", direction.label(), input.display()))?;

    fs::write(destination, &result)
        .with_context(|| format!("Failed to write output: {}", destination.display()))?;
    output::verbose_println(
        1,
        &format!("Wrote {} bytes to {}", result.len(), destination.display()),
    )?;

    let report = TransformReport {
        operation: direction.label(),
        algorithm: algorithm.name(),
        algorithm_id: algorithm.id(),
        input: input.display().to_string(),
        output: destination.display().to_string(),
        input_size: data.len(),
        output_size: result.len(),
        ratio: output::ratio(data.len(), result.len()),
    };

    if output::is_json()? {
        return output::print_json(&report);
    }

    let verb = match direction {
        Direction::Compress => "Compressed",
        Direction::Decompress => "Decompressed",
    };
    let summary = format!(
        "{} {} -> {} ({} -> {}, {:.1}%) with {}",
        verb,
        report.input,
        report.output,
        output::format_size(report.input_size),
        output::format_size(report.output_size),
        report.ratio * 100.0,
        report.algorithm,
    );
    if output::use_color()? {
        output::print_line(&format!("{} {}", "✓".green(), summary))
    } else {
        output::print_line(&summary)
    }
}
