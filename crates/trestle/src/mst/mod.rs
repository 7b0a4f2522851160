//! Minimum spanning tree engines and their shared outcome type.
//!
//! Both engines implement [`MstAlgorithm`]: they take an immutable graph and
//! return an [`MstOutcome`] that either carries the tree or explains why none
//! exists. Alongside the tree itself each run records an abstract operation
//! count and the wall-clock time, so the two algorithms can be compared on
//! the same inputs.

pub mod kruskal;
pub mod prim;

pub use kruskal::KruskalEngine;
pub use prim::PrimEngine;

use std::time::Duration;

use crate::graph::{Edge, Graph};

/// Failure message reported by every engine for a disconnected input.
pub const DISCONNECTED_MESSAGE: &str = "Graph is not connected - MST cannot be formed";

/// A minimum spanning tree algorithm.
pub trait MstAlgorithm {
    /// Display name of the algorithm, e.g. `Prim's Algorithm`.
    fn name(&self) -> &'static str;

    /// Computes the MST of `graph`, leaving the graph unchanged.
    fn find_mst(&self, graph: &Graph) -> MstOutcome;
}

/// Outcome of one engine run: a spanning tree, or a reason there is none.
#[derive(Debug, Clone)]
pub enum MstOutcome {
    /// The graph was connected and a tree was found.
    Success(MstSolution),
    /// No spanning tree exists for this input.
    Failure(MstFailure),
}

/// A computed minimum spanning tree with its run statistics.
#[derive(Debug, Clone)]
pub struct MstSolution {
    /// Tree edges in acceptance order; `vertex_count - 1` entries for a
    /// non-empty graph.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_cost: f64,
    /// Abstract operation count of the run.
    pub operations: u64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Vertex count of the input graph.
    pub vertex_count: usize,
    /// Edge count of the input graph.
    pub edge_count: usize,
}

/// A failed engine run. Carries no tree and no operation count.
#[derive(Debug, Clone)]
pub struct MstFailure {
    /// Human-readable reason the run failed.
    pub message: String,
    /// Vertex count of the input graph.
    pub vertex_count: usize,
    /// Edge count of the input graph.
    pub edge_count: usize,
    /// Wall-clock duration until the failure was detected.
    pub elapsed: Duration,
}

impl MstFailure {
    /// Failure record for a graph that is not connected.
    #[must_use]
    pub fn disconnected(graph: &Graph, elapsed: Duration) -> Self {
        Self {
            message: DISCONNECTED_MESSAGE.to_string(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            elapsed,
        }
    }
}

impl MstOutcome {
    /// Returns `true` for a successful run.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Failure message, if the run failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(&failure.message),
        }
    }

    /// Tree edges; empty for a failed run.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        match self {
            Self::Success(solution) => &solution.edges,
            Self::Failure(_) => &[],
        }
    }

    /// Total tree cost; 0 for a failed run.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        match self {
            Self::Success(solution) => solution.total_cost,
            Self::Failure(_) => 0.0,
        }
    }

    /// Operation count; 0 for a failed run.
    #[must_use]
    pub fn operations(&self) -> u64 {
        match self {
            Self::Success(solution) => solution.operations,
            Self::Failure(_) => 0,
        }
    }

    /// Wall-clock duration of the run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Success(solution) => solution.elapsed,
            Self::Failure(failure) => failure.elapsed,
        }
    }

    /// Vertex count of the input graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Success(solution) => solution.vertex_count,
            Self::Failure(failure) => failure.vertex_count,
        }
    }

    /// Edge count of the input graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Success(solution) => solution.edge_count,
            Self::Failure(failure) => failure.edge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_success() -> MstOutcome {
        MstOutcome::Success(MstSolution {
            edges: vec![Edge::new(0, 1, 2.0), Edge::new(1, 2, 3.0)],
            total_cost: 5.0,
            operations: 17,
            elapsed: Duration::from_millis(4),
            vertex_count: 3,
            edge_count: 3,
        })
    }

    fn sample_failure() -> MstOutcome {
        MstOutcome::Failure(MstFailure {
            message: DISCONNECTED_MESSAGE.to_string(),
            vertex_count: 4,
            edge_count: 1,
            elapsed: Duration::from_millis(1),
        })
    }

    #[test]
    fn success_accessors_expose_the_solution() {
        let outcome = sample_success();

        assert!(outcome.is_success());
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.edges().len(), 2);
        assert!((outcome.total_cost() - 5.0).abs() < f64::EPSILON);
        assert_eq!(outcome.operations(), 17);
        assert_eq!(outcome.vertex_count(), 3);
        assert_eq!(outcome.edge_count(), 3);
    }

    #[test]
    fn failure_accessors_use_neutral_values() {
        let outcome = sample_failure();

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some(DISCONNECTED_MESSAGE));
        assert!(outcome.edges().is_empty());
        assert!(outcome.total_cost().abs() < f64::EPSILON);
        assert_eq!(outcome.operations(), 0);
        assert_eq!(outcome.vertex_count(), 4);
        assert_eq!(outcome.edge_count(), 1);
    }

    #[test]
    fn disconnected_failure_carries_graph_shape() {
        let mut graph = Graph::new(5);
        graph.add_edge(0, 1, 1.0).unwrap();

        let failure = MstFailure::disconnected(&graph, Duration::ZERO);

        assert_eq!(failure.message, DISCONNECTED_MESSAGE);
        assert_eq!(failure.vertex_count, 5);
        assert_eq!(failure.edge_count, 1);
    }
}
