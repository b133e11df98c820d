//! Enclosed-region capture.
//!
//! Sweeps the move's window padded by `SWEEP_PADDING` in row-major order.
//! Every coordinate not held by the mover and not yet swept seeds a flood
//! fill over "not the mover" cells, bounded by the padded box. Regions that
//! come back enclosed are taken whole, regardless of neighbor counts.
//!
//! Regions are disjoint, so the sweep order never changes the result.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{Coord, PlayerId};
use crate::spatial::{LocalSnapshot, SpatialEngine};

/// Cells added on every side of the snapshot window for the sweep.
pub const SWEEP_PADDING: i32 = 2;

/// Payload key recording who held a captured cell before the move.
pub const CAPTURED_FROM: &str = "captured_from";

/// Capture every enclosed region around the move. Returns the number of
/// cells captured.
pub fn find_enclosed_areas(snapshot: &mut LocalSnapshot, engine: &SpatialEngine, player: PlayerId) -> usize {
    let sweep = snapshot.window().padded(SWEEP_PADDING);
    let mut swept: FxHashSet<Coord> = FxHashSet::default();
    let mut captured = 0;

    for coord in sweep.iter() {
        if swept.contains(&coord) || snapshot.owner(coord) == Some(player) {
            continue;
        }

        let region = engine.flood_fill(coord, |_, owner| owner != Some(player), snapshot, Some(&sweep));
        swept.extend(region.cells.iter().copied());

        if !region.enclosed {
            continue;
        }

        let mut taken = 0;
        for &cell in &region.cells {
            if !engine.is_writable(snapshot, cell) {
                continue;
            }
            let previous = snapshot.set_owner(cell, Some(player));
            // Audit the owner before the move, not one the cascade just set.
            let original = snapshot.prior_owner(cell).unwrap_or(previous);
            snapshot.set_payload(cell, CAPTURED_FROM, original);
            taken += 1;
        }

        debug!(
            seed_x = coord.x,
            seed_y = coord.y,
            size = region.len(),
            taken,
            player = %player,
            "captured enclosed region"
        );
        captured += taken;
    }

    captured
}
