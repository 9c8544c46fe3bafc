use crate::{GlobalOptions, OutputFormat, GLOBAL_OPTS};
use anyhow::{anyhow, Result};
use colored::*;
use serde::Serialize;

/// Global options set by `main` before any command runs
pub fn options() -> Result<&'static GlobalOptions> {
    GLOBAL_OPTS
        .get()
        .ok_or_else(|| anyhow!("Global options not initialized"))
}

/// Whether the command should emit structured output instead of text
pub fn is_json() -> Result<bool> {
    Ok(options()?.output == OutputFormat::Json)
}

/// Print JSON output
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    if options()?.quiet {
        return Ok(());
    }
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print a line of text unless quiet mode is on
pub fn print_line(message: &str) -> Result<()> {
    if !options()?.quiet {
        println!("{}", message);
    }
    Ok(())
}

/// Print verbose message (only if verbose mode is on)
pub fn verbose_println(level: u8, message: &str) -> Result<()> {
    let opts = options()?;
    if !opts.quiet && opts.verbose >= level {
        eprintln!("{} {}", "[VERBOSE]".dimmed(), message);
    }
    Ok(())
}

/// Check if we should use color
pub fn use_color() -> Result<bool> {
    let opts = options()?;
    Ok(!opts.no_color && opts.output == OutputFormat::Text)
}

/// Ratio of output to input size, 0.0 for empty input
pub fn ratio(input: usize, output: usize) -> f64 {
    if input == 0 {
        0.0
    } else {
        output as f64 / input as f64
    }
}

/// Human readable byte count
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(0, 10), 0.0);
        assert_eq!(ratio(200, 50), 0.25);
    }
}
