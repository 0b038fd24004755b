//! Plain text view of a generated dungeon
//!
//! One character per grid cell, +z at the top:
//! `#` room anchor, `.` tunnel, space for untouched rock.

use std::fmt::Write;

use dgen_core::dungeon::Coord;
use dgen_core::Dungeon;

const ROOM: char = '#';
const TUNNEL: char = '.';
const ROCK: char = ' ';

/// Render the grid followed by a one line summary
pub fn render(dungeon: &Dungeon) -> String {
    let radius = dungeon.config.radius;
    let side = usize::try_from(radius).unwrap_or(0);
    let tunnels = dungeon.tunnel_cells();
    // side + 3 columns (two borders and a newline), side + 2 rows, then the summary
    let mut out = String::with_capacity((side + 3) * (side + 2) + 64);

    let border = "-".repeat(side);
    let _ = writeln!(out, "+{border}+");
    for z in (0..radius).rev() {
        out.push('|');
        for x in 0..radius {
            let cell = Coord::new(x, z);
            out.push(if dungeon.rooms.contains(&cell) {
                ROOM
            } else if tunnels.contains(&cell) {
                TUNNEL
            } else {
                ROCK
            });
        }
        out.push_str("|\n");
    }
    let _ = writeln!(out, "+{border}+");

    let _ = writeln!(
        out,
        "{} rooms, {} tunnels, {} tunnel steps, tree weight {}",
        dungeon.rooms.len(),
        dungeon.tunnels.len(),
        dungeon.tunnel_steps(),
        dungeon.tree.total_weight(&dungeon.graph)
    );
    out
}
