//! compstrat CLI - compress and decompress files with any registered algorithm
//!
//! The binary is named `compstrat`; the library crate carries the same name.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use compstrat::Algorithm;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

mod commands;
mod config;
mod output;

// Global context for commands to access
pub static GLOBAL_OPTS: OnceLock<GlobalOptions> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub output: OutputFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "compstrat",
    about = "Compress and decompress files with interchangeable algorithms",
    long_about = None,
    after_help = "EXAMPLES:
    # Compress with the configured default algorithm
    compstrat compress notes.txt notes.txt.z

    # Compress with brotli, selected by name or by id
    compstrat compress notes.txt notes.br -a brotli
    compstrat compress notes.txt notes.br -a 4

    # Decompress
    compstrat decompress notes.br notes.txt -a brotli

    # Compare every algorithm on one file
    compstrat compare notes.txt

    # Generate shell completions
    compstrat completion bash > ~/.bash_completion.d/compstrat.bash"
)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(global = true, short = 'o', long, value_enum)]
    output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(global = true, short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(global = true, long)]
    no_color: bool,

    /// Configuration file (defaults to ~/.config/compstrat/config.toml)
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// File to compress
        input: PathBuf,
        /// Destination of the compressed payload
        #[arg(value_name = "OUTPUT")]
        destination: PathBuf,
        /// Algorithm name or id
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },
    /// Decompress a file
    Decompress {
        /// Compressed file
        input: PathBuf,
        /// Destination of the restored payload
        #[arg(value_name = "OUTPUT")]
        destination: PathBuf,
        /// Algorithm name or id that produced the input
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Algorithm,
    },
    /// List registered algorithms
    List,
    /// Compress a file with every algorithm and compare the results
    Compare {
        /// File to compress
        input: PathBuf,
    },
    /// Generate shell completion scripts
    #[command(about = "Generate completion scripts for your shell")]
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    value.parse::<Algorithm>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_ref())?;

    let output = match cli.output {
        Some(format) => format,
        None => config.output_format()?,
    };

    // Set up colored output based on flags
    if cli.no_color || output != OutputFormat::Text {
        colored::control::set_override(false);
    }

    // Configure logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Store global options for commands to access
    let global_opts = GlobalOptions {
        output,
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    GLOBAL_OPTS
        .set(global_opts)
        .map_err(|_| anyhow::anyhow!("Global options already initialized"))?;

    // Execute command
    match cli.command {
        Commands::Compress {
            input,
            destination,
            algorithm,
        } => {
            let algorithm = match algorithm {
                Some(algorithm) => algorithm,
                None => config.default_algorithm()?,
            };
            commands::transform::compress(&input, &destination, algorithm)?;
        }
        Commands::Decompress {
            input,
            destination,
            algorithm,
        } => {
            commands::transform::decompress(&input, &destination, algorithm)?;
        }
        Commands::List => {
            commands::list::list()?;
        }
        Commands::Compare { input } => {
            commands::compare::compare(&input)?;
        }
        Commands::Completion { shell } => {
            // Generate completion script for the specified shell
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
