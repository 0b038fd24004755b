//! dgen-core: Dungeon layout generation
//!
//! Places non-overlapping rooms inside a disk, joins them with a minimum
//! spanning tree over their pairwise distances, and carves an A* tunnel
//! along every tree edge.
//!
//! This crate has no I/O beyond optional config file loading. Rendering the
//! rooms and tunnels is left to the caller.

pub mod config;
pub mod dungeon;
mod error;

pub use config::{ConfigError, DungeonConfig};
pub use dungeon::{Dungeon, DungeonGenerator};
pub use error::GenerationError;

pub use dgen_rng::{
    DrawError, RecordedStream, RecordingSource, ReplaySource, SeededSource, UnitSource,
};
