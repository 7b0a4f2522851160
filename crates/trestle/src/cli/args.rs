//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes.
//! Path options default to `None` here; the configuration layer supplies
//! the working-directory defaults at execution time.

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the `analyze` command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input document path (defaults to the configured input path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Results document path (defaults to the configured output path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the CSV summary to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Arguments for the `inspect` command
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Input document path (defaults to the configured input path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Restrict output to the graph with this id
    #[arg(short, long)]
    pub graph: Option<u32>,
}

/// Arguments for the `report` command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Results document to read (defaults to the configured output path)
    #[arg(short, long)]
    pub results: Option<PathBuf>,

    /// CSV path to write (defaults to the configured csv path)
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Arguments for the `generate` command
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of vertices per graph
    #[arg(short, long, default_value = "50")]
    pub vertices: usize,

    /// Target number of edges per graph
    ///
    /// Clamped to the complete-graph maximum; values below `vertices - 1`
    /// still produce a connected spanning tree.
    #[arg(short, long, default_value = "150")]
    pub edges: usize,

    /// Number of graphs to generate
    #[arg(short, long, default_value = "1")]
    pub graphs: u32,

    /// Seed for reproducible generation
    #[arg(short, long, default_value = "42")]
    pub seed: u64,

    /// Output path (defaults to the configured input path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
