//! Dungeon layout
//!
//! Rooms are placed first, then joined along a minimum spanning tree of
//! their distance graph, one A* tunnel per tree edge.

mod astar;
mod coord;
mod generator;
mod graph;
mod mst;
mod placement;
mod tunnel;

pub use astar::{find_path, Node, Path, SearchGrid, SearchStats};
pub use coord::{Coord, Direction};
pub use generator::{Dungeon, DungeonGenerator};
pub use graph::DistanceGraph;
pub use mst::SpanningTree;
pub use placement::{place_rooms, sample_candidate, ROOM_SEPARATION};
pub use tunnel::{segment_points, Tunnel, TunnelPoint, SEGMENT_STEP, SEGMENT_SUBDIVISIONS};
