//! Neighbor offsets.
//!
//! Orders are fixed. Legality checks short-circuit on the first match, so
//! callers may depend on them; majority counts do not.

use crate::core::Coord;

/// Orthogonal offsets: E, W, N, S.
pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal offsets: NE, SE, NW, SW.
pub const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 4-connected neighbors in `[E, W, N, S]` order.
#[must_use]
pub fn neighbors4(c: Coord) -> [Coord; 4] {
    ORTHOGONAL.map(|(dx, dy)| c.offset(dx, dy))
}

/// The four diagonal neighbors.
#[must_use]
pub fn diagonals(c: Coord) -> [Coord; 4] {
    DIAGONAL.map(|(dx, dy)| c.offset(dx, dy))
}

/// 8-connected neighbors: the orthogonal four, then the diagonals.
#[must_use]
pub fn neighbors8(c: Coord) -> [Coord; 8] {
    let [e, w, n, s] = neighbors4(c);
    let [ne, se, nw, sw] = diagonals(c);
    [e, w, n, s, ne, se, nw, sw]
}
