//! Seeded random generation of connected test networks.
//!
//! Builds a labeled graph that is connected by construction: a random
//! spanning tree first, then extra edges over distinct vertex pairs until the
//! target edge count (or the complete-graph ceiling) is reached. The same
//! seed always yields the same graph, which keeps benchmark inputs and
//! recorded results reproducible.

use crate::error::Result;
use crate::graph::Graph;

/// Deterministic 64-bit linear congruential generator.
///
/// Knuth's MMIX multiplier and increment. Not suitable for anything
/// cryptographic; it only has to be fast and stable across runs.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Creates a generator from a seed. Distinct seeds give distinct streams.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0, 1)` using the top 53 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is 0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.next_u64() as usize) % bound
    }
}

/// Generates a connected graph with `vertex_count` vertices named `N0`,
/// `N1`, ... and roughly `target_edges` edges.
///
/// The spanning tree attaches each vertex to a random earlier one, so at
/// least `vertex_count - 1` edges are present. Extra edges are drawn over
/// distinct unordered pairs; the attempt budget is bounded, so dense targets
/// may come up slightly short. Weights are uniform in `[1, 100)`.
///
/// # Errors
///
/// Propagates graph construction errors; the generated names are unique, so
/// in practice this only fails if the graph model itself changes.
pub fn random_connected(vertex_count: usize, target_edges: usize, seed: u64) -> Result<Graph> {
    let mut rng = SeededRng::new(seed);
    let names = (0..vertex_count).map(|i| format!("N{i}")).collect();
    let mut graph = Graph::with_names(names)?;

    // Spanning tree: each vertex after the first hooks onto a random
    // already-placed vertex.
    for vertex in 1..vertex_count {
        let parent = rng.next_index(vertex);
        let weight = 1.0 + rng.next_f64() * 99.0;
        graph.add_edge(parent, vertex, weight)?;
    }

    if vertex_count < 2 {
        return Ok(graph);
    }

    let tree_edges = vertex_count - 1;
    let max_possible = vertex_count * (vertex_count - 1) / 2;
    let extra = target_edges
        .saturating_sub(tree_edges)
        .min(max_possible - tree_edges);

    let mut added = 0;
    let mut attempts = 0;
    while added < extra && attempts < extra * 3 {
        attempts += 1;
        let a = rng.next_index(vertex_count);
        let b = rng.next_index(vertex_count);
        if a == b || has_pair(&graph, a, b) {
            continue;
        }
        let weight = 1.0 + rng.next_f64() * 99.0;
        graph.add_edge(a, b, weight)?;
        added += 1;
    }

    Ok(graph)
}

fn has_pair(graph: &Graph, a: usize, b: usize) -> bool {
    let pair = if a <= b { (a, b) } else { (b, a) };
    graph.edges().iter().any(|edge| edge.endpoint_pair() == pair)
}
