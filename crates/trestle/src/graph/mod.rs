//! Undirected weighted graph model for transportation networks.
//!
//! Vertices are dense indices `0..vertex_count`, optionally labeled with
//! unique display names. Edges are undirected and carry `f64` weights;
//! parallel edges between the same pair are permitted. The structure is
//! additive only: vertices are fixed at construction and edges can be added
//! but never removed.

mod disjoint_set;
pub mod generate;

pub use disjoint_set::DisjointSet;

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::error::{Error, Result};

/// A weighted undirected edge between two vertices.
///
/// Stored directionally (`source` to `target`) so adjacency lists can hold a
/// mirrored copy per endpoint, but equality treats the endpoint pair as
/// unordered: `(a, b, w)` equals `(b, a, w)`. Display names ride along when
/// the owning graph is labeled and do not participate in equality.
#[derive(Debug, Clone)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
    source_name: Option<String>,
    target_name: Option<String>,
}

impl Edge {
    /// Creates an unlabeled edge.
    #[must_use]
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            source_name: None,
            target_name: None,
        }
    }

    /// Creates an edge carrying endpoint display names.
    #[must_use]
    pub fn with_names(
        source: usize,
        target: usize,
        weight: f64,
        source_name: Option<String>,
        target_name: Option<String>,
    ) -> Self {
        Self {
            source,
            target,
            weight,
            source_name,
            target_name,
        }
    }

    /// Index of the source endpoint.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Index of the target endpoint.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Edge weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Display name of the source endpoint, if the graph is labeled.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Display name of the target endpoint, if the graph is labeled.
    #[must_use]
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    /// Source label for rendering: the display name, or the index as text.
    #[must_use]
    pub fn source_label(&self) -> String {
        self.source_name
            .clone()
            .unwrap_or_else(|| self.source.to_string())
    }

    /// Target label for rendering: the display name, or the index as text.
    #[must_use]
    pub fn target_label(&self) -> String {
        self.target_name
            .clone()
            .unwrap_or_else(|| self.target.to_string())
    }

    /// The same edge seen from the other endpoint.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
            source_name: self.target_name.clone(),
            target_name: self.source_name.clone(),
        }
    }

    /// Unordered endpoint pair, normalized to `(min, max)`.
    #[must_use]
    pub fn endpoint_pair(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl PartialEq for Edge {
    /// Orientation-insensitive equality on the endpoint pair and weight.
    /// Weights compare bitwise, so `-0.0` and `0.0` are distinct.
    fn eq(&self, other: &Self) -> bool {
        self.endpoint_pair() == other.endpoint_pair()
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}-{}, {:.2})",
            self.source_label(),
            self.target_label(),
            self.weight
        )
    }
}

/// An undirected weighted graph with a fixed vertex set.
///
/// Carries optional metadata (`id`, `name`) so a single input document can
/// describe several networks. Both a flat edge list and per-vertex adjacency
/// lists are maintained; every undirected edge appears once in the flat list
/// and twice across the adjacency lists, once per direction.
#[derive(Debug, Clone)]
pub struct Graph {
    id: u32,
    name: Option<String>,
    vertex_count: usize,
    names: Vec<String>,
    name_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph of `vertex_count` unlabeled vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            id: 0,
            name: None,
            vertex_count,
            names: Vec::new(),
            name_index: HashMap::new(),
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph whose vertices are labeled `names[0]`, `names[1]`, ...
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertexName`] if two vertices share a name;
    /// the name-to-index mapping must stay a bijection.
    pub fn with_names(names: Vec<String>) -> Result<Self> {
        let mut name_index = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name_index.insert(name.clone(), index).is_some() {
                return Err(Error::DuplicateVertexName(name.clone()));
            }
        }
        let vertex_count = names.len();
        Ok(Self {
            id: 0,
            name: None,
            vertex_count,
            names,
            name_index,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Numeric identifier, defaulting to 0.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Sets the numeric identifier.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Human-readable graph name, if one was assigned.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Assigns a human-readable name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges, counting each stored edge once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order, one entry per undirected edge.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertex labels in index order; empty when the graph is unlabeled.
    #[must_use]
    pub fn vertex_names(&self) -> &[String] {
        &self.names
    }

    /// Display label for a vertex: its name, or the index rendered as text.
    #[must_use]
    pub fn vertex_name(&self, vertex: usize) -> String {
        self.names
            .get(vertex)
            .cloned()
            .unwrap_or_else(|| vertex.to_string())
    }

    /// Resolves a vertex name to its index.
    #[must_use]
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Edges incident to `vertex`, each oriented outward from it.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= vertex_count()`.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    fn check_vertex(&self, index: usize) -> Result<()> {
        if index < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertexIndex {
                index,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Adds an undirected edge between two vertex indices.
    ///
    /// Both endpoints are validated before anything is stored, so a failed
    /// call leaves the graph untouched. Parallel edges are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if either endpoint is out of
    /// range.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let edge = Edge::with_names(
            source,
            target,
            weight,
            self.names.get(source).cloned(),
            self.names.get(target).cloned(),
        );
        self.adjacency[target].push(edge.reversed());
        self.adjacency[source].push(edge.clone());
        self.edges.push(edge);
        Ok(())
    }

    /// Adds an undirected edge between two named vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertexName`] if either name is not registered.
    pub fn add_edge_named(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let source = self
            .vertex_index(from)
            .ok_or_else(|| Error::UnknownVertexName(from.to_string()))?;
        let target = self
            .vertex_index(to)
            .ok_or_else(|| Error::UnknownVertexName(to.to_string()))?;
        self.add_edge(source, target, weight)
    }

    /// Returns `true` if every vertex is reachable from vertex 0.
    ///
    /// A graph with no vertices is trivially connected. Runs a breadth-first
    /// search; the graph is left unchanged.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.vertex_count == 0 {
            return true;
        }
        let mut visited = vec![false; self.vertex_count];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);
        let mut reached = 1;

        while let Some(vertex) = queue.pop_front() {
            for edge in &self.adjacency[vertex] {
                if !visited[edge.target()] {
                    visited[edge.target()] = true;
                    reached += 1;
                    queue.push_back(edge.target());
                }
            }
        }
        reached == self.vertex_count
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Unions each distinct endpoint pair into a fresh [`DisjointSet`];
    /// a pair whose endpoints already share a set closes a cycle. Parallel
    /// edges over one pair are considered a single connection, a self-loop
    /// counts as a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let mut set = DisjointSet::new(self.vertex_count);
        let mut seen = HashSet::new();

        for edge in &self.edges {
            let pair = edge.endpoint_pair();
            if !seen.insert(pair) {
                continue;
            }
            if set.find(pair.0) == set.find(pair.1) {
                return true;
            }
            set.union(pair.0, pair.1);
        }
        false
    }

    /// Edge density: `2E / (V * (V - 1))`, or 0 for fewer than two vertices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        if self.vertex_count <= 1 {
            return 0.0;
        }
        let vertices = self.vertex_count as f64;
        let edges = self.edges.len() as f64;
        (2.0 * edges) / (vertices * (vertices - 1.0))
    }

    /// One edge per endpoint pair, keeping the first stored edge for each
    /// pair. Parallel edges collapse; insertion order is preserved.
    #[must_use]
    pub fn distinct_edges(&self) -> Vec<&Edge> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .filter(|edge| seen.insert(edge.endpoint_pair()))
            .collect()
    }
}

impl fmt::Display for Graph {
    /// Renders the name (or `Unnamed`), the vertex count, and each endpoint
    /// pair once, keeping the first edge stored for that pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph: {}", self.name.as_deref().unwrap_or("Unnamed"))?;
        writeln!(f, "Vertices: {}", self.vertex_count)?;
        writeln!(f, "Edges:")?;
        for edge in self.distinct_edges() {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn named_square() -> Graph {
        let mut graph = Graph::with_names(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ])
        .unwrap();
        graph.add_edge_named("A", "B", 1.0).unwrap();
        graph.add_edge_named("B", "C", 2.0).unwrap();
        graph.add_edge_named("C", "D", 3.0).unwrap();
        graph
    }

    #[test]
    fn new_graph_is_empty() {
        let graph = Graph::new(3);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges().is_empty());
        assert!(graph.vertex_names().is_empty());
    }

    #[test]
    fn with_names_registers_lookup() {
        let graph = Graph::with_names(vec!["Depot".to_string(), "Port".to_string()]).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertex_index("Depot"), Some(0));
        assert_eq!(graph.vertex_index("Port"), Some(1));
        assert_eq!(graph.vertex_index("Yard"), None);
        assert_eq!(graph.vertex_name(1), "Port");
    }

    #[test]
    fn with_names_rejects_duplicates() {
        let result = Graph::with_names(vec![
            "A".to_string(),
            "B".to_string(),
            "A".to_string(),
        ]);

        assert!(matches!(result, Err(Error::DuplicateVertexName(name)) if name == "A"));
    }

    #[test]
    fn vertex_name_falls_back_to_index() {
        let graph = Graph::new(2);

        assert_eq!(graph.vertex_name(0), "0");
        assert_eq!(graph.vertex_name(1), "1");
    }

    #[test]
    fn add_edge_updates_both_adjacency_lists() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 2, 4.5).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(0).len(), 1);
        assert_eq!(graph.neighbors(2).len(), 1);
        assert!(graph.neighbors(1).is_empty());

        let forward = &graph.neighbors(0)[0];
        assert_eq!(forward.source(), 0);
        assert_eq!(forward.target(), 2);

        let backward = &graph.neighbors(2)[0];
        assert_eq!(backward.source(), 2);
        assert_eq!(backward.target(), 0);
        assert!((backward.weight() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn add_edge_carries_vertex_names() {
        let graph = named_square();
        let edge = &graph.edges()[0];

        assert_eq!(edge.source_name(), Some("A"));
        assert_eq!(edge.target_name(), Some("B"));
        assert_eq!(edge.to_string(), "(A-B, 1.00)");
    }

    #[rstest]
    #[case::source_out_of_range(5, 1)]
    #[case::target_out_of_range(0, 9)]
    fn add_edge_rejects_bad_index(#[case] source: usize, #[case] target: usize) {
        let mut graph = Graph::new(3);

        let result = graph.add_edge(source, target, 1.0);

        assert!(matches!(result, Err(Error::InvalidVertexIndex { .. })));
        // A failed add must leave no partial state behind.
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(1).is_empty());
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn add_edge_named_rejects_unknown_name() {
        let mut graph = Graph::with_names(vec!["A".to_string(), "B".to_string()]).unwrap();

        let result = graph.add_edge_named("A", "Z", 1.0);

        assert!(matches!(result, Err(Error::UnknownVertexName(name)) if name == "Z"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 0, 7.0).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(0).len(), 2);
        assert_eq!(graph.neighbors(1).len(), 2);
    }

    #[test]
    fn edge_equality_ignores_orientation() {
        let forward = Edge::new(0, 1, 2.5);
        let backward = Edge::new(1, 0, 2.5);
        let heavier = Edge::new(0, 1, 3.0);
        let elsewhere = Edge::new(0, 2, 2.5);

        assert_eq!(forward, backward);
        assert_ne!(forward, heavier);
        assert_ne!(forward, elsewhere);
    }

    #[test]
    fn empty_graph_is_connected() {
        assert!(Graph::new(0).is_connected());
    }

    #[test]
    fn single_vertex_is_connected() {
        assert!(Graph::new(1).is_connected());
    }

    #[test]
    fn path_graph_is_connected() {
        assert!(named_square().is_connected());
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();

        assert!(!graph.is_connected());
    }

    #[test]
    fn two_islands_are_not_connected() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();

        assert!(!graph.is_connected());
    }

    #[test]
    fn tree_has_no_cycle() {
        assert!(!named_square().has_cycle());
    }

    #[test]
    fn closing_the_square_creates_a_cycle() {
        let mut graph = named_square();
        graph.add_edge_named("D", "A", 4.0).unwrap();

        assert!(graph.has_cycle());
    }

    #[test]
    fn parallel_edges_do_not_count_as_a_cycle() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 1, 9.0).unwrap();

        assert!(!graph.has_cycle());
    }

    #[test]
    fn self_loop_counts_as_a_cycle() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 0, 1.0).unwrap();

        assert!(graph.has_cycle());
    }

    #[rstest]
    #[case::empty(0, &[], 0.0)]
    #[case::single(1, &[], 0.0)]
    #[case::half(4, &[(0, 1), (1, 2), (2, 3)], 0.5)]
    #[case::complete(3, &[(0, 1), (1, 2), (0, 2)], 1.0)]
    fn density_matches_formula(
        #[case] vertices: usize,
        #[case] edges: &[(usize, usize)],
        #[case] expected: f64,
    ) {
        let mut graph = Graph::new(vertices);
        for &(source, target) in edges {
            graph.add_edge(source, target, 1.0).unwrap();
        }

        assert!((graph.density() - expected).abs() < 1e-9);
    }

    #[test]
    fn display_lists_each_pair_once() {
        let mut graph = named_square();
        graph.set_name("Metro");
        graph.add_edge_named("B", "A", 8.0).unwrap();

        let rendered = graph.to_string();

        assert!(rendered.starts_with("Graph: Metro\nVertices: 4\nEdges:\n"));
        assert!(rendered.contains("  (A-B, 1.00)\n"));
        assert!(rendered.contains("  (B-C, 2.00)\n"));
        assert!(rendered.contains("  (C-D, 3.00)\n"));
        // The parallel B-A edge shares a pair with A-B and is not repeated.
        assert!(!rendered.contains("8.00"));
    }

    #[test]
    fn display_uses_unnamed_fallback() {
        let graph = Graph::new(2);

        assert!(graph.to_string().starts_with("Graph: Unnamed\n"));
    }

    #[test]
    fn distinct_edges_collapses_parallel_pairs() {
        let mut graph = named_square();
        graph.add_edge_named("B", "A", 8.0).unwrap();

        let distinct = graph.distinct_edges();

        assert_eq!(distinct.len(), 3);
        // The first edge stored for the A-B pair wins.
        assert!((distinct[0].weight() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metadata_defaults_and_setters() {
        let mut graph = Graph::new(1);

        assert_eq!(graph.id(), 0);
        assert_eq!(graph.name(), None);

        graph.set_id(7);
        graph.set_name("Harbor");

        assert_eq!(graph.id(), 7);
        assert_eq!(graph.name(), Some("Harbor"));
    }
}
