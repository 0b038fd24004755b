//! A* search over an open square grid
//!
//! Every cell is walkable and all eight moves cost 1. Before the search
//! starts, every cell gets `g` = rounded distance from the start and
//! `h` = rounded distance to the end. A closed node reached more cheaply
//! later has its cost and parent overwritten in place but is never
//! re-opened, so paths are short but not guaranteed optimal.

use log::trace;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::tunnel::{segment_points, TunnelPoint};
use super::{Coord, Direction};
use crate::config::MAX_RADIUS;
use crate::error::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Membership {
    #[default]
    Unseen,
    Open,
    Closed,
}

/// Search state for one grid cell
#[derive(Debug, Clone)]
pub struct Node {
    pub coord: Coord,
    pub g_cost: i32,
    pub h_cost: i32,
    pub f_cost: i32,
    /// Index of the node this one was reached from
    pub parent: Option<usize>,
    membership: Membership,
}

impl Node {
    pub fn is_open(&self) -> bool {
        self.membership == Membership::Open
    }

    pub fn is_closed(&self) -> bool {
        self.membership == Membership::Closed
    }
}

/// Nodes compare by position only
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Node {}

/// Counters from one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes moved to the closed set
    pub expanded: usize,
    /// Largest open set seen
    pub peak_open: usize,
}

/// A found path and its tunnel placement points
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    cells: Vec<Coord>,
    points: Vec<TunnelPoint>,
    stats: SearchStats,
}

impl Path {
    /// Cells from start to end, both included
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Tunnel points, walking from the end back to the start
    pub fn points(&self) -> &[TunnelPoint] {
        &self.points
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves; each costs 1
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn into_parts(self) -> (Vec<Coord>, Vec<TunnelPoint>) {
        (self.cells, self.points)
    }
}

/// A `radius × radius` arena of nodes for one search
///
/// Node `(x, z)` lives at index `x * radius + z`.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    radius: i32,
    start: usize,
    end: usize,
    nodes: Vec<Node>,
}

impl SearchGrid {
    /// Allocate a fresh grid with costs precomputed for `start` and `end`
    pub fn new(radius: i32, start: Coord, end: Coord) -> Result<Self, GenerationError> {
        if radius <= 0 || radius > MAX_RADIUS {
            return Err(GenerationError::invalid("radius", radius));
        }
        if !start.in_bounds(radius) {
            return Err(GenerationError::invalid("start", start));
        }
        if !end.in_bounds(radius) {
            return Err(GenerationError::invalid("end", end));
        }

        let side = radius as usize;
        let mut nodes = Vec::with_capacity(side * side);
        for x in 0..radius {
            for z in 0..radius {
                let coord = Coord::new(x, z);
                let g_cost = start.rounded_distance(coord);
                let h_cost = coord.rounded_distance(end);
                nodes.push(Node {
                    coord,
                    g_cost,
                    h_cost,
                    f_cost: g_cost + h_cost,
                    parent: None,
                    membership: Membership::Unseen,
                });
            }
        }

        let index = |c: Coord| c.x as usize * side + c.z as usize;
        Ok(Self {
            radius,
            start: index(start),
            end: index(end),
            nodes,
        })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        coord
            .in_bounds(self.radius)
            .then(|| coord.x as usize * self.radius as usize + coord.z as usize)
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn node_at(&self, coord: Coord) -> Option<&Node> {
        self.index_of(coord).map(|i| &self.nodes[i])
    }

    pub fn open_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_open()).count()
    }

    pub fn closed_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_closed()).count()
    }

    fn unreachable(&self) -> GenerationError {
        GenerationError::UnreachableTarget {
            from: self.nodes[self.start].coord,
            to: self.nodes[self.end].coord,
        }
    }

    /// Run the search from start to end
    pub fn search(&mut self) -> Result<Path, GenerationError> {
        let mut open = vec![self.start];
        self.nodes[self.start].membership = Membership::Open;
        let mut stats = SearchStats::default();

        while !open.is_empty() {
            stats.peak_open = stats.peak_open.max(open.len());

            // Stable sort: equal f keeps the existing list order
            open.sort_by_key(|&i| self.nodes[i].f_cost);
            let current = open.remove(0);
            self.nodes[current].membership = Membership::Closed;
            stats.expanded += 1;

            if current == self.end {
                for i in open.drain(..) {
                    self.nodes[i].membership = Membership::Unseen;
                }
                trace!(
                    "path {} -> {}: expanded {}, peak open {}",
                    self.nodes[self.start].coord,
                    self.nodes[self.end].coord,
                    stats.expanded,
                    stats.peak_open
                );
                return self.reconstruct(stats);
            }

            let from = self.nodes[current].coord;
            let tentative = self.nodes[current].g_cost + 1;

            for dir in Direction::iter() {
                let Some(n) = self.index_of(from.step(dir)) else {
                    continue;
                };
                let node = &mut self.nodes[n];

                match node.membership {
                    Membership::Unseen => {
                        node.g_cost = tentative;
                        node.f_cost = tentative + node.h_cost;
                        node.parent = Some(current);
                        node.membership = Membership::Open;
                        open.push(n);
                    }
                    Membership::Open | Membership::Closed => {
                        if tentative < node.g_cost {
                            node.g_cost = tentative;
                            node.f_cost = tentative + node.h_cost;
                            node.parent = Some(current);
                        }
                    }
                }
            }
        }

        Err(self.unreachable())
    }

    /// Walk parent links from the end back to the start
    ///
    /// `g` strictly decreases along parent links, so the walk ends.
    fn reconstruct(&self, stats: SearchStats) -> Result<Path, GenerationError> {
        let mut cells = vec![self.nodes[self.end].coord];
        let mut points = Vec::new();
        let mut current = self.end;

        while current != self.start {
            let parent = self.nodes[current].parent.ok_or_else(|| self.unreachable())?;
            let here = self.nodes[current].coord;
            let there = self.nodes[parent].coord;

            points.extend(segment_points(here, there));
            cells.push(there);
            current = parent;
        }

        cells.reverse();
        Ok(Path {
            cells,
            points,
            stats,
        })
    }
}

/// Find a path from `start` to `end` on a fresh `radius × radius` grid
pub fn find_path(start: Coord, end: Coord, radius: i32) -> Result<Path, GenerationError> {
    SearchGrid::new(radius, start, end)?.search()
}
