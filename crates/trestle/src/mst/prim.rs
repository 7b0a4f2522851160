//! Prim's algorithm: grow the tree outward from vertex 0.
//!
//! A binary min-heap holds the frontier, i.e. every known edge from an
//! included vertex to a candidate endpoint. The lightest entry wins each
//! round. Entries whose far endpoint was included in the meantime are
//! discarded on extraction; that is a normal byproduct of leaving stale
//! entries in the heap instead of re-keying it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::{debug, warn};

use crate::graph::{Edge, Graph};
use crate::mst::{MstAlgorithm, MstFailure, MstOutcome, MstSolution};

/// Prim's algorithm over the per-vertex adjacency lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimEngine;

impl PrimEngine {
    /// Creates the engine. Stateless; one instance can serve many runs.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Heap entry ordered so the `BinaryHeap` pops the lightest edge first.
/// Weight ties fall back to the heap's own order; the total cost does not
/// depend on which equal-weight edge is taken.
struct FrontierEntry(Edge);

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed operands: BinaryHeap is a max-heap and the minimum
        // weight has to surface first.
        other
            .0
            .weight()
            .partial_cmp(&self.0.weight())
            .unwrap_or(Ordering::Equal)
    }
}

impl MstAlgorithm for PrimEngine {
    fn name(&self) -> &'static str {
        "Prim's Algorithm"
    }

    fn find_mst(&self, graph: &Graph) -> MstOutcome {
        let start = Instant::now();
        let mut operations: u64 = 0;
        let vertex_count = graph.vertex_count();

        if !graph.is_connected() {
            warn!(algorithm = self.name(), "graph is not connected");
            return MstOutcome::Failure(MstFailure::disconnected(graph, start.elapsed()));
        }

        // A graph without vertices has nothing to grow from.
        if vertex_count == 0 {
            return MstOutcome::Success(MstSolution {
                edges: Vec::new(),
                total_cost: 0.0,
                operations,
                elapsed: start.elapsed(),
                vertex_count,
                edge_count: graph.edge_count(),
            });
        }

        let mut edges = Vec::with_capacity(vertex_count - 1);
        let mut total_cost = 0.0;
        let mut in_tree = vec![false; vertex_count];
        let mut frontier = BinaryHeap::new();

        in_tree[0] = true;
        operations += 1; // start vertex selected

        for edge in graph.neighbors(0) {
            frontier.push(FrontierEntry(edge.clone()));
            operations += 1; // frontier insertion
        }

        while edges.len() + 1 < vertex_count {
            let Some(FrontierEntry(edge)) = frontier.pop() else {
                break;
            };
            operations += 1; // frontier extraction

            let far = edge.target();
            if in_tree[far] {
                operations += 1; // stale entry discarded
                continue;
            }

            in_tree[far] = true;
            total_cost += edge.weight();
            edges.push(edge);
            operations += 1; // edge accepted

            for next in graph.neighbors(far) {
                if !in_tree[next.target()] {
                    frontier.push(FrontierEntry(next.clone()));
                    operations += 1; // frontier insertion
                }
                operations += 1; // neighbor scanned
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::DISCONNECTED_MESSAGE;

    fn network() -> Graph {
        // A-B=1, A-C=4, B-C=2, C-D=3, B-D=5; the cheapest tree costs 6.
        let mut graph = Graph::with_names(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ])
        .unwrap();
        graph.add_edge_named("A", "B", 1.0).unwrap();
        graph.add_edge_named("A", "C", 4.0).unwrap();
        graph.add_edge_named("B", "C", 2.0).unwrap();
        graph.add_edge_named("C", "D", 3.0).unwrap();
        graph.add_edge_named("B", "D", 5.0).unwrap();
        graph
    }

    #[test]
    fn finds_the_cheapest_tree() {
        let outcome = PrimEngine::new().find_mst(&network());

        let MstOutcome::Success(solution) = outcome else {
            panic!("expected a success");
        };
        assert!((solution.total_cost - 6.0).abs() < 1e-9);
        assert_eq!(solution.edges.len(), 3);
        assert_eq!(solution.vertex_count, 4);
        assert_eq!(solution.edge_count, 5);
    }

    #[test]
    fn accepts_edges_in_growth_order() {
        let outcome = PrimEngine::new().find_mst(&network());

        // Growth from A: A-B (1), then B-C (2), then C-D (3).
        let pairs: Vec<_> = outcome
            .edges()
            .iter()
            .map(|edge| (edge.source(), edge.target()))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn discards_stale_frontier_entries() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 2, 2.0).unwrap();
        graph.add_edge(1, 2, 3.0).unwrap();
        graph.add_edge(2, 3, 4.0).unwrap();

        let outcome = PrimEngine::new().find_mst(&graph);

        // The 1-2 entry surfaces after both endpoints are in the tree and
        // must be skipped without harming the result.
        assert!((outcome.total_cost() - 7.0).abs() < 1e-9);
        assert_eq!(outcome.edges().len(), 3);
    }

    #[test]
    fn equal_weight_cycle_still_costs_the_same() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 5.0).unwrap();
        graph.add_edge(1, 2, 5.0).unwrap();
        graph.add_edge(2, 3, 5.0).unwrap();
        graph.add_edge(3, 0, 5.0).unwrap();

        let outcome = PrimEngine::new().find_mst(&graph);

        assert!((outcome.total_cost() - 15.0).abs() < 1e-9);
        assert_eq!(outcome.edges().len(), 3);
    }

    #[test]
    fn single_vertex_yields_empty_tree() {
        let outcome = PrimEngine::new().find_mst(&Graph::new(1));

        let MstOutcome::Success(solution) = outcome else {
            panic!("expected a success");
        };
        assert!(solution.edges.is_empty());
        assert!(solution.total_cost.abs() < f64::EPSILON);
        // Only the start vertex selection is counted.
        assert_eq!(solution.operations, 1);
    }

    #[test]
    fn empty_graph_yields_empty_tree() {
        let outcome = PrimEngine::new().find_mst(&Graph::new(0));

        assert!(outcome.is_success());
        assert!(outcome.edges().is_empty());
        assert_eq!(outcome.operations(), 0);
    }

    #[test]
    fn disconnected_graph_fails() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();

        let outcome = PrimEngine::new().find_mst(&graph);

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some(DISCONNECTED_MESSAGE));
        assert!(outcome.edges().is_empty());
        assert_eq!(outcome.vertex_count(), 4);
        assert_eq!(outcome.edge_count(), 2);
    }

    #[test]
    fn two_vertex_path_counts_every_step() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 1.0).unwrap();

        let outcome = PrimEngine::new().find_mst(&graph);

        // Start selection, one insertion, one extraction, one acceptance,
        // and one neighbor scan back toward the tree.
        assert_eq!(outcome.operations(), 5);
    }

    #[test]
    fn repeated_runs_count_identically() {
        let graph = network();
        let engine = PrimEngine::new();

        let first = engine.find_mst(&graph);
        let second = engine.find_mst(&graph);

        assert_eq!(first.operations(), second.operations());
        assert!((first.total_cost() - second.total_cost()).abs() < f64::EPSILON);
    }

    #[test]
    fn engine_reports_its_name() {
        assert_eq!(PrimEngine::new().name(), "Prim's Algorithm");
    }
}
