//! Dungeon generation pipeline
//!
//! Rooms, then the distance graph, then the spanning tree, then one tunnel
//! per tree edge. Each stage finishes before the next starts.

use dgen_rng::UnitSource;
use hashbrown::HashSet;
use log::{debug, trace};
use serde::Serialize;

use super::{find_path, place_rooms, Coord, DistanceGraph, SpanningTree, Tunnel};
use crate::config::DungeonConfig;
use crate::error::GenerationError;

/// A generated dungeon layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dungeon {
    pub config: DungeonConfig,
    /// Room anchors in placement order
    pub rooms: Vec<Coord>,
    pub graph: DistanceGraph,
    pub tree: SpanningTree,
    /// One tunnel per tree edge, in increasing child room order
    pub tunnels: Vec<Tunnel>,
}

impl Dungeon {
    /// Every grid cell some tunnel passes through, room anchors included
    pub fn tunnel_cells(&self) -> HashSet<Coord> {
        self.tunnels
            .iter()
            .flat_map(|t| t.cells.iter().copied())
            .collect()
    }

    /// Total tunnel length in grid steps
    pub fn tunnel_steps(&self) -> usize {
        self.tunnels.iter().map(Tunnel::len).sum()
    }
}

/// Generates dungeons for one validated config
#[derive(Debug, Clone, Copy)]
pub struct DungeonGenerator {
    config: DungeonConfig,
}

impl DungeonGenerator {
    /// Fails fast on parameters no stage can work with
    pub fn new(config: DungeonConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Generate one dungeon, taking every random draw from `rng`
    pub fn generate<R: UnitSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Dungeon, GenerationError> {
        let config = self.config;

        let rooms = place_rooms(&config, rng)?;
        let graph = DistanceGraph::from_rooms(&rooms);
        let tree = SpanningTree::prim(&graph);
        debug!(
            "spanning tree over {} rooms, total weight {}",
            rooms.len(),
            tree.total_weight(&graph)
        );

        let mut tunnels = Vec::with_capacity(tree.edge_count());
        for (parent, child) in tree.edges() {
            let path = find_path(rooms[parent], rooms[child], config.radius)?;
            trace!("tunnel {} -> {}: {} steps", parent, child, path.steps());
            tunnels.push(Tunnel::new(parent, child, path));
        }

        let dungeon = Dungeon {
            config,
            rooms,
            graph,
            tree,
            tunnels,
        };
        debug!(
            "generated {} rooms and {} tunnels ({} steps)",
            dungeon.rooms.len(),
            dungeon.tunnels.len(),
            dungeon.tunnel_steps()
        );
        Ok(dungeon)
    }
}
