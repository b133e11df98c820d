//! In-memory cell store.
//!
//! Backed by a persistent `im::OrdMap` keyed by `Coord`. Because `Coord`
//! orders by `x` then `y`, a bounding-box load is one range scan over `x`
//! with a `y` filter. Saves build the next map from an O(1) clone and swap
//! it in only once the whole batch is applied.

use im::OrdMap;

use super::CellStore;
use crate::core::{Bounds, Cell, Coord, StoreResult};

/// Cell store held entirely in memory.
///
/// ## Usage
///
/// ```
/// use rust_grid::core::{Bounds, Cell, Coord, PlayerId};
/// use rust_grid::store::{CellStore, MemoryCellStore};
///
/// let mut store = MemoryCellStore::new();
/// store.save_cells(&[Cell::owned(Coord::new(2, 3), PlayerId::new(1))]).unwrap();
///
/// let hits = store.load_cells(&Bounds::new(0, 5, 0, 5)).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert!(store.load_cells(&Bounds::new(3, 5, 0, 5)).unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryCellStore {
    cells: OrdMap<Coord, Cell>,
}

impl MemoryCellStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `cells`. Later duplicates win.
    #[must_use]
    pub fn with_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells = cells.into_iter().map(|c| (c.coord, c)).collect();
        Self { cells }
    }

    /// Get a stored cell.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Number of stored cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellStore for MemoryCellStore {
    fn load_cells(&self, bounds: &Bounds) -> StoreResult<Vec<Cell>> {
        if bounds.area() == 0 {
            return Ok(Vec::new());
        }
        let lo = Coord::new(bounds.min_x, i32::MIN);
        let hi = Coord::new(bounds.max_x, i32::MAX);

        Ok(self
            .cells
            .range(lo..=hi)
            .filter(|(coord, _)| coord.y >= bounds.min_y && coord.y <= bounds.max_y)
            .map(|(_, cell)| cell.clone())
            .collect())
    }

    fn save_cells(&mut self, cells: &[Cell]) -> StoreResult<()> {
        let mut next = self.cells.clone();
        for cell in cells {
            next.insert(cell.coord, cell.clone());
        }
        self.cells = next;
        Ok(())
    }

    fn load_all(&self) -> StoreResult<Vec<Cell>> {
        Ok(self.cells.iter().map(|(_, cell)| cell.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn p(id: u32) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_load_cells_in_bounds() {
        let store = MemoryCellStore::with_cells(vec![
            Cell::owned(Coord::new(0, 0), p(1)),
            Cell::owned(Coord::new(1, 5), p(1)),
            Cell::owned(Coord::new(2, 2), p(2)),
            Cell::owned(Coord::new(-4, 1), p(2)),
        ]);

        let mut coords: Vec<_> = store
            .load_cells(&Bounds::new(0, 2, 0, 2))
            .unwrap()
            .into_iter()
            .map(|c| c.coord)
            .collect();
        coords.sort();
        assert_eq!(coords, vec![Coord::new(0, 0), Coord::new(2, 2)]);

        assert_eq!(store.load_cells(&Bounds::new(-10, 10, -10, 10)).unwrap().len(), 4);
        assert!(store.load_cells(&Bounds::new(5, 4, 0, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryCellStore::with_cells(vec![Cell::owned(Coord::new(0, 0), p(1))]);
        store
            .save_cells(&[Cell::owned(Coord::new(0, 0), p(2)), Cell::new(Coord::new(1, 1))])
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(Coord::new(0, 0)).unwrap().owner, Some(p(2)));
        assert_eq!(store.get(Coord::new(1, 1)).unwrap().owner, None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut store = MemoryCellStore::new();
        let before = store.clone();
        store.save_cells(&[Cell::owned(Coord::new(3, 3), p(1))]).unwrap();

        assert!(before.is_empty());
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
