//! Minimum spanning tree over the room graph (Prim's algorithm)

use serde::Serialize;

use super::DistanceGraph;

/// A spanning tree stored as a parent array rooted at vertex 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    parent: Vec<Option<usize>>,
}

/// Index of the cheapest vertex not yet in the tree
///
/// Scans in index order with a strict comparison, so the lowest index wins
/// ties. Vertices still at `i32::MAX` are never picked.
fn min_key(key: &[i32], in_tree: &[bool]) -> Option<usize> {
    let mut min = i32::MAX;
    let mut min_index = None;

    for (v, (&k, &included)) in key.iter().zip(in_tree).enumerate() {
        if !included && k < min {
            min = k;
            min_index = Some(v);
        }
    }

    min_index
}

impl SpanningTree {
    /// Build the minimum spanning tree of `graph`
    ///
    /// A weight of 0 between distinct vertices is treated as "no edge".
    pub fn prim(graph: &DistanceGraph) -> Self {
        let vertices = graph.len();
        let mut parent = vec![None; vertices];
        let mut key = vec![i32::MAX; vertices];
        let mut in_tree = vec![false; vertices];

        if vertices == 0 {
            return Self { parent };
        }
        key[0] = 0;

        for _ in 0..vertices - 1 {
            let Some(u) = min_key(&key, &in_tree) else {
                break;
            };
            in_tree[u] = true;

            for v in 0..vertices {
                let w = graph.weight(u, v);
                if w != 0 && !in_tree[v] && w < key[v] {
                    parent[v] = Some(u);
                    key[v] = w;
                }
            }
        }

        Self { parent }
    }

    /// Build a tree from an explicit parent array
    ///
    /// Returns `None` unless vertex 0 is the only root and every other vertex
    /// reaches it through parent links.
    pub fn from_parents(parent: Vec<Option<usize>>) -> Option<Self> {
        let tree = Self { parent };
        tree.is_spanning().then_some(tree)
    }

    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().flatten()
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// `(parent, child)` pairs in increasing child order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, p)| p.map(|p| (p, child)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn total_weight(&self, graph: &DistanceGraph) -> i64 {
        self.edges()
            .map(|(p, c)| i64::from(graph.weight(p, c)))
            .sum()
    }

    /// Number of edges between `v` and the root, or `None` if `v` is out of
    /// range or its parent chain does not end at vertex 0
    pub fn depth(&self, v: usize) -> Option<usize> {
        if v >= self.parent.len() {
            return None;
        }
        let mut current = v;
        let mut depth = 0;
        while let Some(p) = self.parent[current] {
            if p >= self.parent.len() || depth >= self.parent.len() {
                return None;
            }
            current = p;
            depth += 1;
        }
        (current == 0).then_some(depth)
    }

    /// True if the parent links form one tree rooted at vertex 0
    pub fn is_spanning(&self) -> bool {
        if self.parent.is_empty() {
            return true;
        }
        self.parent[0].is_none() && (0..self.parent.len()).all(|v| self.depth(v).is_some())
    }
}
