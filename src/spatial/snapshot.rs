//! Per-move local snapshot.
//!
//! A `LocalSnapshot` is loaded once when a move starts and dropped when it
//! ends. Legality, cascade and enclosure all read and write this in-memory
//! copy; the store is never consulted mid-move.
//!
//! Coordinates that were not loaded read as unowned. Writes are recorded in
//! a change log so the final batch contains each touched cell exactly once.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::{Bounds, Cell, Coord, PayloadKey, PayloadValue, PlayerId};

/// In-memory view of the cells around a move.
#[derive(Clone, Debug)]
pub struct LocalSnapshot {
    /// Region that was loaded from the store.
    window: Bounds,

    cells: FxHashMap<Coord, Cell>,

    /// Coordinates written during the move, in first-write order.
    changed: Vec<Coord>,

    /// Owner of each changed coordinate before its first write.
    prior: FxHashMap<Coord, Option<PlayerId>>,
}

impl LocalSnapshot {
    /// Empty snapshot covering `window`.
    #[must_use]
    pub fn new(window: Bounds) -> Self {
        Self {
            window,
            cells: FxHashMap::default(),
            changed: Vec::new(),
            prior: FxHashMap::default(),
        }
    }

    /// Snapshot populated from loaded cells.
    ///
    /// Cells outside `window` are ignored so unloaded state never leaks in.
    #[must_use]
    pub fn from_cells(window: Bounds, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut snapshot = Self::new(window);
        for cell in cells {
            if window.contains(cell.coord) {
                snapshot.cells.insert(cell.coord, cell);
            }
        }
        snapshot
    }

    /// The loaded region.
    #[must_use]
    pub fn window(&self) -> &Bounds {
        &self.window
    }

    /// Owner at `coord`, `None` when unowned or not loaded.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> Option<PlayerId> {
        self.cells.get(&coord).and_then(|c| c.owner)
    }

    /// Cell at `coord`, if one exists.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Set the owner at `coord`, creating the cell on first write.
    ///
    /// Returns the owner before this write.
    pub fn set_owner(&mut self, coord: Coord, owner: Option<PlayerId>) -> Option<PlayerId> {
        let cell = self.cells.entry(coord).or_insert_with(|| Cell::new(coord));
        let previous = cell.owner;
        cell.owner = owner;

        if !self.prior.contains_key(&coord) {
            self.prior.insert(coord, previous);
            self.changed.push(coord);
        }
        previous
    }

    /// Set a payload entry on an existing or new cell.
    pub fn set_payload(&mut self, coord: Coord, key: impl Into<PayloadKey>, value: impl Into<PayloadValue>) {
        self.cells
            .entry(coord)
            .or_insert_with(|| Cell::new(coord))
            .payload
            .insert(key.into(), value.into());
    }

    /// Owner before the move first wrote `coord`. `None` if never written.
    #[must_use]
    pub fn prior_owner(&self, coord: Coord) -> Option<Option<PlayerId>> {
        self.prior.get(&coord).copied()
    }

    /// Has this move written `coord`?
    #[must_use]
    pub fn is_changed(&self, coord: Coord) -> bool {
        self.prior.contains_key(&coord)
    }

    /// Coordinates written so far, in first-write order.
    #[must_use]
    pub fn changed_coords(&self) -> &[Coord] {
        &self.changed
    }

    /// Final state of every written cell, each exactly once.
    #[must_use]
    pub fn changed_cells(&self) -> Vec<Cell> {
        self.changed
            .iter()
            .filter_map(|c| self.cells.get(c).cloned())
            .collect()
    }

    /// Count owned cells among `coords`, in first-seen order.
    #[must_use]
    pub fn tally(&self, coords: &[Coord]) -> SmallVec<[(PlayerId, usize); 8]> {
        let mut counts: SmallVec<[(PlayerId, usize); 8]> = SmallVec::new();
        for &c in coords {
            if let Some(owner) = self.owner(c) {
                match counts.iter_mut().find(|(p, _)| *p == owner) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((owner, 1)),
                }
            }
        }
        counts
    }

    /// Number of loaded cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is the snapshot empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Distinct owners present in the snapshot.
    #[must_use]
    pub fn owners(&self) -> FxHashSet<PlayerId> {
        self.cells.values().filter_map(|c| c.owner).collect()
    }
}
