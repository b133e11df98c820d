//! Cell persistence.
//!
//! The engine never talks to a database directly. Games are handed a
//! `CellStore` and call it at exactly two points per move: one bounded load
//! when the move starts and one batched save when it ends.
//!
//! `MemoryCellStore` is the in-process implementation used by tests and
//! single-node servers.

pub mod memory;

pub use memory::MemoryCellStore;

use crate::core::{Bounds, Cell, StoreResult};

/// Load/save collaborator for cells.
///
/// ## Implementation Notes
///
/// - `load_cells`: return every stored cell inside `bounds` (inclusive),
///   in any order. Missing coordinates are simply absent.
/// - `save_cells`: all-or-nothing. On error, none of the batch may be
///   visible to later loads.
/// - `load_all`: every stored cell; used for scoring.
pub trait CellStore {
    /// Load the cells inside `bounds`.
    fn load_cells(&self, bounds: &Bounds) -> StoreResult<Vec<Cell>>;

    /// Persist a batch of cells atomically.
    fn save_cells(&mut self, cells: &[Cell]) -> StoreResult<()>;

    /// Load every stored cell.
    fn load_all(&self) -> StoreResult<Vec<Cell>>;
}

impl<S: CellStore + ?Sized> CellStore for Box<S> {
    fn load_cells(&self, bounds: &Bounds) -> StoreResult<Vec<Cell>> {
        (**self).load_cells(bounds)
    }

    fn save_cells(&mut self, cells: &[Cell]) -> StoreResult<()> {
        (**self).save_cells(cells)
    }

    fn load_all(&self) -> StoreResult<Vec<Cell>> {
        (**self).load_all()
    }
}
