//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors)

pub mod color;

use std::env;
use std::io::{self, Write};

use serde::Serialize;

use crate::graph::Graph;
use crate::io::{AnalysisRecord, EdgeSpec};
use crate::mst::MstOutcome;

pub use color::{error, info, success, warning};

use color::{bold, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: standard env var to disable colors (any value disables)
    /// - `TRESTLE_COLOR`: set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(env::var("NO_COLOR").ok(), env::var("TRESTLE_COLOR").ok())
    }

    fn from_vars(no_color: Option<String>, trestle_color: Option<String>) -> Self {
        // Respect the NO_COLOR standard (https://no-color.org/) before the
        // tool-specific switch.
        let use_colors = no_color.is_none()
            && trestle_color.is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));
        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print one graph's engine runs and their comparison in the specified format.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn print_analysis(
    graph: &Graph,
    prim: &MstOutcome,
    kruskal: &MstOutcome,
    tolerance: f64,
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => {
            print_analysis_text(&mut handle, graph, prim, kruskal, tolerance, &config)
        }
        OutputMode::Json => print_analysis_json(&mut handle, graph, prim, kruskal),
    }
}

/// Print a graph's structure in the specified format.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn print_inspection(graph: &Graph, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_inspection_text(&mut handle, graph, &config),
        OutputMode::Json => print_inspection_json(&mut handle, graph),
    }
}

/// Print a JSON-formatted result for any serializable value.
///
/// # Errors
///
/// Returns any error from serialization or from writing to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_pretty(&mut handle, value)
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_analysis_text<W: Write>(
    w: &mut W,
    graph: &Graph,
    prim: &MstOutcome,
    kruskal: &MstOutcome,
    tolerance: f64,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "Processing {} (ID: {})",
        bold(graph.name().unwrap_or("Unnamed"), config),
        graph.id()
    )?;
    writeln!(
        w,
        "{} {}, {} {}",
        dimmed("Vertices:", config),
        graph.vertex_count(),
        dimmed("Edges:", config),
        graph.edge_count()
    )?;

    if !prim.is_success() && !kruskal.is_success() {
        writeln!(w, "{}", warning("WARNING: Graph is not connected!", config))?;
    }

    writeln!(w)?;
    writeln!(w, "{}", info("Running Prim's Algorithm...", config))?;
    print_outcome_text(w, prim, config)?;

    writeln!(w)?;
    writeln!(w, "{}", info("Running Kruskal's Algorithm...", config))?;
    print_outcome_text(w, kruskal, config)?;

    print_comparison_text(w, prim, kruskal, tolerance, config)
}

fn print_outcome_text<W: Write>(
    w: &mut W,
    outcome: &MstOutcome,
    config: &OutputConfig,
) -> io::Result<()> {
    if let Some(message) = outcome.message() {
        writeln!(w, "{}", error(&format!("Failed: {message}"), config))?;
        return Ok(());
    }

    writeln!(w, "Total Cost: {:.2}", outcome.total_cost())?;
    writeln!(w, "MST Edges: {}", outcome.edges().len())?;
    writeln!(w, "Operations: {}", outcome.operations())?;
    writeln!(w, "Execution Time: {} ms", outcome.elapsed().as_millis())?;
    writeln!(w, "Edges in MST:")?;
    for edge in outcome.edges() {
        writeln!(
            w,
            "  {} -> {} ({:.2})",
            edge.source_label(),
            edge.target_label(),
            edge.weight()
        )?;
    }
    Ok(())
}

/// Comparison block; printed only when both runs produced a tree.
fn print_comparison_text<W: Write>(
    w: &mut W,
    prim: &MstOutcome,
    kruskal: &MstOutcome,
    tolerance: f64,
    config: &OutputConfig,
) -> io::Result<()> {
    if !prim.is_success() || !kruskal.is_success() {
        return Ok(());
    }

    writeln!(w)?;
    writeln!(w, "{}", bold("--- Comparison ---", config))?;

    let verdict = if (prim.total_cost() - kruskal.total_cost()).abs() < tolerance {
        success("YES", config)
    } else {
        error("NO", config)
    };
    writeln!(w, "Cost Match: {verdict}")?;
    writeln!(w, "Prim Time: {} ms", prim.elapsed().as_millis())?;
    writeln!(w, "Kruskal Time: {} ms", kruskal.elapsed().as_millis())?;
    writeln!(w, "Prim Operations: {}", prim.operations())?;
    writeln!(w, "Kruskal Operations: {}", kruskal.operations())?;
    Ok(())
}

fn print_inspection_text<W: Write>(
    w: &mut W,
    graph: &Graph,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "Graph: {} (ID: {})",
        bold(graph.name().unwrap_or("Unnamed"), config),
        graph.id()
    )?;
    writeln!(
        w,
        "{} {}, {} {}",
        dimmed("Vertices:", config),
        graph.vertex_count(),
        dimmed("Edges:", config),
        graph.edge_count()
    )?;
    writeln!(w, "{} {:.3}", dimmed("Density:", config), graph.density())?;

    let connected = if graph.is_connected() {
        success("yes", config)
    } else {
        error("no", config)
    };
    writeln!(w, "{} {connected}", dimmed("Connected:", config))?;
    writeln!(
        w,
        "{} {}",
        dimmed("Cycles:", config),
        if graph.has_cycle() { "yes" } else { "no" }
    )?;

    writeln!(w, "Edges:")?;
    for edge in graph.distinct_edges() {
        writeln!(w, "  {edge}")?;
    }
    Ok(())
}

// ============================================================================
// JSON Formatting
// ============================================================================

fn print_analysis_json<W: Write>(
    w: &mut W,
    graph: &Graph,
    prim: &MstOutcome,
    kruskal: &MstOutcome,
) -> io::Result<()> {
    let record = AnalysisRecord::new(graph, prim, kruskal);
    write_pretty(w, &record)
}

fn print_inspection_json<W: Write>(w: &mut W, graph: &Graph) -> io::Result<()> {
    let edge_list: Vec<EdgeSpec> = graph
        .distinct_edges()
        .into_iter()
        .map(EdgeSpec::from_edge)
        .collect();
    let value = serde_json::json!({
        "id": graph.id(),
        "name": graph.name(),
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "density": graph.density(),
        "connected": graph.is_connected(),
        "cyclic": graph.has_cycle(),
        "edge_list": edge_list,
    });
    write_pretty(w, &value)
}

fn write_pretty<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}
