//! Kruskal's algorithm: sorted edges filtered through a union-find.
//!
//! Edges are taken lightest first; an edge joins the tree only when its
//! endpoints sit in different components. The scan stops as soon as the
//! tree holds `vertices - 1` edges, so heavy edges at the tail of a dense
//! graph are never examined.

use std::cmp::Ordering;
use std::time::Instant;

use tracing::{debug, warn};

use crate::graph::{DisjointSet, Edge, Graph};
use crate::mst::{MstAlgorithm, MstFailure, MstOutcome, MstSolution};

/// Kruskal's algorithm over the flat edge list.
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalEngine;

impl KruskalEngine {
    /// Creates the engine. Stateless; one instance can serve many runs.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Flat charge for sorting `edge_total` edges, `n * ln(n)` truncated.
/// Counting the comparisons inside the standard sort would tie the figure
/// to its implementation, so the charge is modeled instead.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sort_charge(edge_total: usize) -> u64 {
    if edge_total > 1 {
        (edge_total as f64 * (edge_total as f64).ln()) as u64
    } else {
        0
    }
}

impl MstAlgorithm for KruskalEngine {
    fn name(&self) -> &'static str {
        "Kruskal's Algorithm"
    }

    fn find_mst(&self, graph: &Graph) -> MstOutcome {
        let start = Instant::now();
        let mut operations: u64 = 0;
        let vertex_count = graph.vertex_count();

        if !graph.is_connected() {
            warn!(algorithm = self.name(), "graph is not connected");
            return MstOutcome::Failure(MstFailure::disconnected(graph, start.elapsed()));
        }

        // Stable sort: equal weights keep their input order, which keeps
        // the chosen tree reproducible across runs.
        let mut sorted: Vec<Edge> = graph.edges().to_vec();
        sorted.sort_by(|a, b| {
            a.weight()
                .partial_cmp(&b.weight())
                .unwrap_or(Ordering::Equal)
        });
        operations += sort_charge(sorted.len());

        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
        let mut total_cost = 0.0;
        let mut components = DisjointSet::new(vertex_count);
        let target = vertex_count.saturating_sub(1);

        for edge in sorted {
            operations += 1; // edge examined

            let root_source = components.find(edge.source());
            let root_target = components.find(edge.target());
            operations += 2; // two component lookups

            if root_source != root_target {
                total_cost += edge.weight();
                components.union(edge.source(), edge.target());
                edges.push(edge);
                operations += 2; // acceptance and union

                if edges.len() == target {
                    break;
                }
            }
        }

        debug!(
            algorithm = self.name(),
            cost = total_cost,
            operations,
            "spanning tree complete"
        );

        MstOutcome::Success(MstSolution {
            edges,
            total_cost,
            operations,
            elapsed: start.elapsed(),
            vertex_count,
            edge_count: graph.edge_count(),
        })
    }
}
