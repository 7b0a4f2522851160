//! JSON documents: graph input files and analysis results files.
//!
//! The input document lists graph definitions keyed by vertex name; the
//! results document pairs one Prim and one Kruskal report per graph and is
//! what the `report` command consumes later. Both are read and written
//! whole, pretty-printed.

pub mod csv;

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::mst::MstOutcome;

/// Top-level input document: a list of graph definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDocument {
    /// Graph definitions in file order.
    #[serde(default)]
    pub graphs: Vec<GraphSpec>,
}

impl InputDocument {
    /// Reads and parses an input document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Json`] when it does not parse.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let document: Self = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            graphs = document.graphs.len(),
            "input document loaded"
        );
        Ok(document)
    }

    /// Writes the document pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when serialization fails and [`Error::Io`]
    /// when the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        debug!(path = %path.display(), graphs = self.graphs.len(), "input document written");
        Ok(())
    }

    /// Materializes every definition into a [`Graph`].
    ///
    /// # Errors
    ///
    /// Returns the first definition's error; see [`GraphSpec::to_graph`].
    pub fn build_graphs(&self) -> Result<Vec<Graph>> {
        self.graphs.iter().map(GraphSpec::to_graph).collect()
    }
}

/// One graph definition inside an input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Numeric identifier; 0 when absent.
    #[serde(default)]
    pub id: u32,
    /// Display name; `Graph <id>` is substituted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered vertex names; positions define the vertex indices.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Edge definitions, endpoints given by vertex name.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Captures a graph back into its document form.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            id: graph.id(),
            name: graph.name().map(str::to_string),
            nodes: graph.vertex_names().to_vec(),
            edges: graph.edges().iter().map(EdgeSpec::from_edge).collect(),
        }
    }

    /// Builds the in-memory graph this definition describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertexName`] for repeated node names and
    /// [`Error::InvalidInput`] naming the graph when an edge references an
    /// unknown vertex.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::with_names(self.nodes.clone())?;
        graph.set_id(self.id);
        graph.set_name(
            self.name
                .clone()
                .unwrap_or_else(|| format!("Graph {}", self.id)),
        );

        for edge in &self.edges {
            graph
                .add_edge_named(&edge.from, &edge.to, edge.weight)
                .map_err(|source| {
                    Error::InvalidInput(format!(
                        "graph '{}': edge {} -> {}: {source}",
                        graph.name().unwrap_or("?"),
                        edge.from,
                        edge.to
                    ))
                })?;
        }
        Ok(graph)
    }
}

/// One edge inside a graph definition or an MST edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source vertex name.
    pub from: String,
    /// Target vertex name.
    pub to: String,
    /// Edge weight.
    pub weight: f64,
}

impl EdgeSpec {
    /// Captures an edge using its display labels.
    #[must_use]
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            from: edge.source_label(),
            to: edge.target_label(),
            weight: edge.weight(),
        }
    }
}

/// Results document: a timestamp plus one record per analyzed graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    /// When the analysis ran, UTC.
    pub generated_at: DateTime<Utc>,
    /// Records in input order.
    pub results: Vec<AnalysisRecord>,
}

impl ResultsDocument {
    /// Wraps records with the current timestamp.
    #[must_use]
    pub fn new(results: Vec<AnalysisRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }

    /// Reads and parses a results document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Json`] when it does not parse.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let document: Self = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            records = document.results.len(),
            "results document loaded"
        );
        Ok(document)
    }

    /// Writes the document pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when serialization fails and [`Error::Io`]
    /// when the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        debug!(path = %path.display(), records = self.results.len(), "results document written");
        Ok(())
    }
}

/// Per-graph results for both engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Identifier of the analyzed graph.
    pub graph_id: u32,
    /// Name of the analyzed graph, when it had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_name: Option<String>,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's run.
    pub prim: EngineReport,
    /// Kruskal's run.
    pub kruskal: EngineReport,
}

impl AnalysisRecord {
    /// Pairs two engine outcomes for one graph.
    #[must_use]
    pub fn new(graph: &Graph, prim: &MstOutcome, kruskal: &MstOutcome) -> Self {
        Self {
            graph_id: graph.id(),
            graph_name: graph.name().map(str::to_string),
            input_stats: InputStats {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            },
            prim: EngineReport::from_outcome(prim),
            kruskal: EngineReport::from_outcome(kruskal),
        }
    }
}

/// Vertex and edge counts of an input graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of undirected edges.
    pub edges: usize,
}

/// Engine outcome as stored in a results document.
///
/// A success node carries the tree and its measurements and no `success`
/// flag at all; a failure node carries `success: false` and the message,
/// nothing else. `untagged` keeps that shape on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngineReport {
    /// Completed run.
    Success {
        /// Tree edges in acceptance order.
        mst_edges: Vec<EdgeSpec>,
        /// Exact total weight of the tree.
        total_cost: f64,
        /// Operation counter at the end of the run.
        operations_count: u64,
        /// Wall-clock run time in whole milliseconds.
        execution_time_ms: u64,
    },
    /// Failed run.
    Failure {
        /// Always `false`.
        success: bool,
        /// Why the run produced no tree.
        message: String,
    },
}

impl EngineReport {
    /// Converts an engine outcome into its document form.
    #[must_use]
    pub fn from_outcome(outcome: &MstOutcome) -> Self {
        match outcome {
            MstOutcome::Success(solution) => Self::Success {
                mst_edges: solution.edges.iter().map(EdgeSpec::from_edge).collect(),
                total_cost: solution.total_cost,
                operations_count: solution.operations,
                execution_time_ms: elapsed_ms(solution.elapsed),
            },
            MstOutcome::Failure(failure) => Self::Failure {
                success: false,
                message: failure.message.clone(),
            },
        }
    }

    /// `true` for a success node.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Total cost; 0.0 for a failure.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        match self {
            Self::Success { total_cost, .. } => *total_cost,
            Self::Failure { .. } => 0.0,
        }
    }

    /// Operation count; 0 for a failure.
    #[must_use]
    pub fn operations_count(&self) -> u64 {
        match self {
            Self::Success {
                operations_count, ..
            } => *operations_count,
            Self::Failure { .. } => 0,
        }
    }

    /// Run time in milliseconds; 0 for a failure.
    #[must_use]
    pub fn execution_time_ms(&self) -> u64 {
        match self {
            Self::Success {
                execution_time_ms, ..
            } => *execution_time_ms,
            Self::Failure { .. } => 0,
        }
    }

    /// Failure message, if this is a failure node.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
