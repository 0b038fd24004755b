//! Complete weighted graph over room anchors

use serde::Serialize;

use super::Coord;

/// Symmetric matrix of rounded Euclidean distances between rooms
///
/// `weight(i, i)` is always 0. Built once and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceGraph {
    size: usize,
    weights: Vec<i32>,
}

impl DistanceGraph {
    pub fn from_rooms(rooms: &[Coord]) -> Self {
        let size = rooms.len();
        let weights = rooms
            .iter()
            .flat_map(|a| rooms.iter().map(move |b| a.rounded_distance(*b)))
            .collect();
        Self { size, weights }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Edge weight between rooms `i` and `j`
    ///
    /// Panics if either index is out of range.
    pub fn weight(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.size && j < self.size, "vertex out of range");
        self.weights[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks_exact panics on 0
        self.weights.chunks_exact(self.size.max(1))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i..self.size).all(|j| self.weight(i, j) == self.weight(j, i)))
    }
}
