//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for trestle using clap's
//! derive API. Each command has its own argument struct; path flags fall back
//! to the values in `trestle.yaml` when omitted.
//!
//! # Commands
//!
//! - `analyze`: Run both MST engines over an input document and record results
//! - `inspect`: Print structural details for the graphs in an input document
//! - `report`: Regenerate the CSV summary from a recorded results document
//! - `generate`: Produce seeded random connected graphs as an input document
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! trestle generate --vertices 30 --edges 80 --output input.json
//! trestle analyze --input input.json --output output.json --csv report.csv
//! trestle inspect --input input.json --graph 1
//! trestle report --results output.json
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{AnalyzeArgs, GenerateArgs, InspectArgs, ReportArgs};

/// Trestle - Minimum spanning tree analysis for transportation networks
///
/// Computes MSTs with Prim's and Kruskal's algorithms, cross-checks their
/// total costs, and records operation counts and timings for comparison.
/// Graphs are read from and written to JSON documents.
#[derive(Parser, Debug)]
#[command(name = "trestle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze every graph in an input document
    ///
    /// Runs Prim's and Kruskal's algorithms over each graph, prints the
    /// comparison, and writes a timestamped results document. Optionally
    /// also writes the CSV summary.
    Analyze(AnalyzeArgs),

    /// Inspect graphs without running the engines
    ///
    /// Prints vertex and edge counts, density, connectivity, and cycle
    /// presence for each graph, or for a single graph selected by id.
    Inspect(InspectArgs),

    /// Build the CSV summary from recorded results
    ///
    /// Reads a results document produced by `analyze` and writes one CSV
    /// row per graph.
    Report(ReportArgs),

    /// Generate random connected test graphs
    ///
    /// Builds seeded graphs that are connected by construction and writes
    /// them as an input document ready for `analyze`.
    Generate(GenerateArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error when the arguments do not parse.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Propagates the executed command's error.
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Analyze(args)) => execute::execute_analyze(args, output_mode).await,
            Some(Commands::Inspect(args)) => execute::execute_inspect(args, output_mode).await,
            Some(Commands::Report(args)) => execute::execute_report(args, output_mode).await,
            Some(Commands::Generate(args)) => execute::execute_generate(args, output_mode).await,
            None => {
                println!("Trestle MST analysis toolkit");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
