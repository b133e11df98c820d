//! Bounded breadth-first flood fill.
//!
//! ## Enclosure
//!
//! A region is `enclosed` only if every visited cell is strictly inside
//! the optional bounding box and the fill finished below
//! `MAX_REGION_CELLS`. Hitting the cap always clears `enclosed`, because
//! a truncated region says nothing about what lies beyond it.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::neighbors::neighbors4;
use super::snapshot::LocalSnapshot;
use crate::core::{Bounds, Coord, PlayerId};

/// Hard cap on region size. Bounds the cost of a fill on unbounded grids.
pub const MAX_REGION_CELLS: usize = 500;

/// Output of a flood fill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Visited coordinates in BFS order, seed first.
    pub cells: Vec<Coord>,

    /// See module docs.
    pub enclosed: bool,

    /// Owner of the seed cell.
    pub owner: Option<PlayerId>,
}

impl Region {
    /// Number of cells in the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is the region empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Did the fill stop at the size cap?
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.cells.len() >= MAX_REGION_CELLS
    }
}

/// 4-connected BFS from `seed` over cells accepted by `predicate`.
///
/// A neighbor is enqueued iff `predicate(coord, owner)` holds and it has
/// not been visited. If the seed itself is rejected the region is empty
/// and not enclosed.
///
/// ```
/// use rust_grid::core::{Bounds, Cell, Coord, PlayerId};
/// use rust_grid::spatial::{flood_fill, LocalSnapshot};
///
/// let a = PlayerId::new(0);
/// let window = Bounds::new(-3, 3, -3, 3);
/// let walls = [(1, 0), (-1, 0), (0, 1), (0, -1)].map(|(x, y)| Cell::owned(Coord::new(x, y), a));
/// let snapshot = LocalSnapshot::from_cells(window, walls);
///
/// let region = flood_fill(Coord::new(0, 0), |_, owner| owner != Some(a), &snapshot, Some(&window));
/// assert_eq!(region.cells, vec![Coord::new(0, 0)]);
/// assert!(region.enclosed);
/// ```
pub fn flood_fill<F>(seed: Coord, predicate: F, snapshot: &LocalSnapshot, bounds: Option<&Bounds>) -> Region
where
    F: Fn(Coord, Option<PlayerId>) -> bool,
{
    let origin = snapshot.owner(seed);
    let mut region = Region {
        cells: Vec::new(),
        enclosed: true,
        owner: origin,
    };

    if !predicate(seed, origin) {
        region.enclosed = false;
        return region;
    }

    let mut visited = FxHashSet::default();
    visited.insert(seed);
    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(coord) = queue.pop_front() {
        if region.cells.len() >= MAX_REGION_CELLS {
            break;
        }

        if let Some(b) = bounds {
            if b.touches_perimeter(coord) {
                region.enclosed = false;
            }
        }
        region.cells.push(coord);

        for next in neighbors4(coord) {
            if !visited.contains(&next) && predicate(next, snapshot.owner(next)) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    if region.is_capped() {
        region.enclosed = false;
    }
    region
}
