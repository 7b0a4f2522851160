//! Disjoint-set forest with union by rank and path compression.
//!
//! Backs cycle detection in [`Graph`](super::Graph) and edge acceptance in
//! Kruskal's algorithm. Elements are the dense vertex indices `0..size`.

use std::cmp::Ordering;

/// Disjoint-set forest (union-find) over `0..size`.
///
/// Every element starts as its own singleton set. `find` compresses paths as
/// it walks, so repeated queries flatten the forest toward constant depth.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DisjointSet {
    /// Creates a forest of `size` singleton sets.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Number of elements in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Compresses the path from `element` to its root so the next lookup is
    /// cheaper. Two elements are in the same set exactly when their
    /// representatives are equal.
    ///
    /// # Panics
    ///
    /// Panics if `element >= len()`. Callers are expected to stay within the
    /// range the forest was created with.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point every node on the walk directly at the root.
        let mut current = element;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The shallower tree is attached under the deeper one; on a rank tie the
    /// root of `y` is attached under the root of `x` and the rank of `x`'s
    /// root grows by one. Uniting elements already in the same set changes
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if either element is `>= len()`.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }
}
