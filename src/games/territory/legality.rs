//! Placement legality.

use crate::core::{Coord, PlayerId};
use crate::spatial::{diagonals, neighbors4, LocalSnapshot};

/// May `player` place at `target`?
///
/// - A declared first move is always legal.
/// - Otherwise some orthogonal neighbor must be the player's, or a
///   diagonal neighbor must be the player's with both corner cells between
///   it and the target held by other players (diagonal tunneling).
///
/// Pure: repeated calls on an unchanged snapshot agree.
#[must_use]
pub fn can_place_at(snapshot: &LocalSnapshot, target: Coord, player: PlayerId, is_first_move: bool) -> bool {
    if is_first_move {
        return true;
    }

    if neighbors4(target)
        .into_iter()
        .any(|n| snapshot.owner(n) == Some(player))
    {
        return true;
    }

    diagonals(target).into_iter().any(|d| can_tunnel(snapshot, target, d, player))
}

/// Diagonal tunneling through a pocket pinched by two opposing cells.
fn can_tunnel(snapshot: &LocalSnapshot, target: Coord, diagonal: Coord, player: PlayerId) -> bool {
    if snapshot.owner(diagonal) != Some(player) {
        return false;
    }
    let corner_a = Coord::new(diagonal.x, target.y);
    let corner_b = Coord::new(target.x, diagonal.y);

    player.is_opponent(snapshot.owner(corner_a)) && player.is_opponent(snapshot.owner(corner_b))
}
