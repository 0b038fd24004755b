//! Tunnel placement points along a found path

use serde::{Deserialize, Serialize};

use super::{Coord, Path};

/// Points emitted per grid step
pub const SEGMENT_SUBDIVISIONS: usize = 20;

/// Interpolation step between consecutive points of one segment
pub const SEGMENT_STEP: f32 = 1.0 / SEGMENT_SUBDIVISIONS as f32;

/// A fractional position where a renderer places one tunnel piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TunnelPoint {
    pub x: f32,
    pub z: f32,
}

/// Points from `from` towards `to` at `t = 0, 0.05, .. 0.95`
///
/// `to` itself is not included; the next segment starts there.
pub fn segment_points(from: Coord, to: Coord) -> impl Iterator<Item = TunnelPoint> {
    let dx = (to.x - from.x) as f32;
    let dz = (to.z - from.z) as f32;
    (0..SEGMENT_SUBDIVISIONS).map(move |k| {
        let t = k as f32 * SEGMENT_STEP;
        TunnelPoint {
            x: from.x as f32 + t * dx,
            z: from.z as f32 + t * dz,
        }
    })
}

/// The tunnel joining two rooms along one spanning tree edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tunnel {
    /// Tree parent; the path starts at this room
    pub from_room: usize,
    /// Tree child; the path ends at this room
    pub to_room: usize,
    /// Grid cells from `from_room` to `to_room`, both included
    pub cells: Vec<Coord>,
    /// Placement points, walking from `to_room` back to `from_room`
    pub points: Vec<TunnelPoint>,
}

impl Tunnel {
    pub fn new(from_room: usize, to_room: usize, path: Path) -> Self {
        let (cells, points) = path.into_parts();
        Self {
            from_room,
            to_room,
            cells,
            points,
        }
    }

    /// Grid steps in the tunnel
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
