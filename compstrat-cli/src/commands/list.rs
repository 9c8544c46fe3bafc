//! List command implementation

use crate::output;
use anyhow::Result;
use colored::*;
use compstrat::{registry, Algorithm};
use serde::Serialize;

#[derive(Serialize)]
struct AlgorithmEntry {
    id: u8,
    name: Algorithm,
}

/// List every registered algorithm in id order
pub fn list() -> Result<()> {
    let entries: Vec<AlgorithmEntry> = registry()
        .strategies()
        .map(|strategy| {
            let algorithm = strategy.algorithm();
            AlgorithmEntry {
                id: algorithm.id(),
                name: algorithm,
            }
        })
        .collect();

    if output::is_json()? {
        return output::print_json(&entries);
    }

    let color = output::use_color()?;
    if color {
        output::print_line(&format!("{:>3}  {}", "ID".bold(), "NAME".bold()))?;
    } else {
        output::print_line(&format!("{:>3}  NAME", "ID"))?;
    }
    for entry in &entries {
        if color {
            output::print_line(&format!("{:>3}  {}", entry.id, entry.name.name().cyan()))?;
        } else {
            output::print_line(&format!("{:>3}  {}", entry.id, entry.name))?;
        }
    }
    Ok(())
}
