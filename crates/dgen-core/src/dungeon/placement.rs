//! Room placement by rejection sampling inside a disk
//!
//! Candidates are drawn with the usual uniform-disk transform and folded
//! into the first quadrant, then half of them are mirrored through the far
//! corner so rooms spread over the whole `radius × radius` square instead
//! of clustering near the origin.

use std::f64::consts::PI;

use dgen_rng::{DrawError, UnitSource};
use hashbrown::HashSet;
use log::{debug, trace};

use super::Coord;
use crate::config::DungeonConfig;
use crate::error::GenerationError;

/// Minimum Chebyshev distance between two room anchors is this plus one
pub const ROOM_SEPARATION: i32 = 2;

/// Draw one candidate anchor; consumes exactly four draws
///
/// The result can fall one cell outside `[0, radius)` when the sampled point
/// lands exactly on the disk edge; callers reject such candidates.
pub fn sample_candidate<R: UnitSource + ?Sized>(
    radius: i32,
    rng: &mut R,
) -> Result<Coord, DrawError> {
    let t = 2.0 * PI * rng.next_unit()?;
    let u = rng.next_unit()? + rng.next_unit()?;
    let r = if u > 1.0 { 2.0 - u } else { u };

    let scale = f64::from(radius) * r;
    let mut x = (scale * t.cos()).abs() as i32;
    let mut z = (scale * t.sin()).abs() as i32;

    if rng.next_unit()? > 0.5 {
        x = radius - 1 - x;
        z = radius - 1 - z;
    }

    Ok(Coord::new(x, z))
}

/// True if any placed anchor lies within [`ROOM_SEPARATION`] of `candidate`
fn overlaps(occupied: &HashSet<Coord>, candidate: Coord) -> bool {
    (-ROOM_SEPARATION..=ROOM_SEPARATION).any(|dx| {
        (-ROOM_SEPARATION..=ROOM_SEPARATION)
            .any(|dz| occupied.contains(&candidate.offset(dx, dz)))
    })
}

/// Place `config.room_count` anchors, in placement order
///
/// Each room gets at most `config.max_placement_attempts` candidates.
pub fn place_rooms<R: UnitSource + ?Sized>(
    config: &DungeonConfig,
    rng: &mut R,
) -> Result<Vec<Coord>, GenerationError> {
    config.validate()?;

    let radius = config.radius;
    let mut rooms = Vec::with_capacity(config.room_count);
    let mut occupied = HashSet::with_capacity(config.room_count);
    let mut total_attempts = 0u64;

    for _ in 0..config.room_count {
        let mut attempts = 0;
        let anchor = loop {
            if attempts == config.max_placement_attempts {
                return Err(GenerationError::PlacementExhaustion {
                    placed: rooms.len(),
                    requested: config.room_count,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = sample_candidate(radius, rng)?;
            if candidate.in_bounds(radius) && !overlaps(&occupied, candidate) {
                break candidate;
            }
        };

        trace!("room {} at {} after {} attempts", rooms.len(), anchor, attempts);
        total_attempts += u64::from(attempts);
        occupied.insert(anchor);
        rooms.push(anchor);
    }

    debug!(
        "placed {} rooms in radius {} using {} candidates",
        rooms.len(),
        radius,
        total_attempts
    );
    Ok(rooms)
}
