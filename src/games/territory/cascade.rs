//! Placement and cascading majority conversion.
//!
//! After the target is claimed, its 8 neighbors seed a work queue. Each
//! coordinate is examined at most once per move:
//!
//! - unowned: converts to any owner holding `UNOWNED_THRESHOLD` of its 4
//!   orthogonal neighbors
//! - held by someone other than the mover: flips to any other owner
//!   holding `FLIP_THRESHOLD` of its 8 neighbors
//!
//! Every conversion enqueues the converted cell's neighbors, so ownership
//! spreads outward until nothing else crosses a threshold.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{Coord, MoveError, PlayerId};
use crate::spatial::{LocalSnapshot, SpatialEngine};

/// Orthogonal neighbors an owner needs to claim an unowned cell.
pub const UNOWNED_THRESHOLD: usize = 3;

/// Neighbors (of 8) an owner needs to flip an opponent's cell.
pub const FLIP_THRESHOLD: usize = 5;

/// Claim `target` for `player` and run the cascade.
///
/// Returns the coordinates the cascade examined. On `Err` the snapshot is
/// untouched.
pub fn apply_grid_move(
    snapshot: &mut LocalSnapshot,
    engine: &SpatialEngine,
    target: Coord,
    player: PlayerId,
) -> Result<FxHashSet<Coord>, MoveError> {
    check_target(snapshot, engine, target, player)?;
    snapshot.set_owner(target, Some(player));

    let mut processed = FxHashSet::default();
    let mut queue: VecDeque<Coord> = engine.neighbors8(target).into_iter().collect();

    while let Some(coord) = queue.pop_front() {
        if !processed.insert(coord) {
            continue;
        }
        if !engine.is_writable(snapshot, coord) {
            continue;
        }

        let Some(new_owner) = conversion(snapshot, engine, coord, player) else {
            continue;
        };

        let previous = snapshot.set_owner(coord, Some(new_owner));
        trace!(x = coord.x, y = coord.y, ?previous, owner = %new_owner, "cascade conversion");

        for next in engine.neighbors8(coord) {
            if !processed.contains(&next) {
                queue.push_back(next);
            }
        }
    }

    Ok(processed)
}

/// Can `player` claim `target` itself? Rejects the player's own cells and
/// opponent cells held with fewer than `FLIP_THRESHOLD` neighbors.
pub fn check_target(
    snapshot: &LocalSnapshot,
    engine: &SpatialEngine,
    target: Coord,
    player: PlayerId,
) -> Result<(), MoveError> {
    match snapshot.owner(target) {
        None => Ok(()),
        Some(owner) if owner == player => Err(MoveError::AlreadyOwned),
        Some(_) => {
            let held = engine
                .neighbors8(target)
                .iter()
                .filter(|&&n| snapshot.owner(n) == Some(player))
                .count();
            if held < FLIP_THRESHOLD {
                Err(MoveError::InsufficientNeighbors)
            } else {
                Ok(())
            }
        }
    }
}

/// New owner for `coord`, if a threshold is met.
fn conversion(snapshot: &LocalSnapshot, engine: &SpatialEngine, coord: Coord, mover: PlayerId) -> Option<PlayerId> {
    match snapshot.owner(coord) {
        None => snapshot
            .tally(&engine.neighbors4(coord))
            .into_iter()
            .find(|&(_, n)| n >= UNOWNED_THRESHOLD)
            .map(|(owner, _)| owner),
        Some(owner) if owner != mover => snapshot
            .tally(&engine.neighbors8(coord))
            .into_iter()
            .find(|&(p, n)| p != owner && n >= FLIP_THRESHOLD)
            .map(|(p, _)| p),
        Some(_) => None,
    }
}
