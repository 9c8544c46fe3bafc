//! Subcommand implementations

pub mod compare;
pub mod list;
pub mod transform;
