//! Spatial engine: the geometry every game is built on.
//!
//! Composes a `GridManager` and a `ChunkManager` and adds neighbor
//! queries, bounded flood fill, snapshot windows and change-to-chunk
//! mapping. Games hold a `SpatialEngine` rather than extending it.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use super::flood::{flood_fill, Region};
use super::neighbors::{neighbors4, neighbors8};
use super::snapshot::LocalSnapshot;
use crate::core::{Bounds, Cell, ChunkCoord, Coord, GridRules, PlayerId};
use crate::grid::{ChunkManager, GridManager};

/// Shared spatial primitives for one game instance.
#[derive(Clone, Copy, Debug)]
pub struct SpatialEngine {
    grid: GridManager,
    chunks: ChunkManager,
}

impl SpatialEngine {
    /// Create an engine for the given rules.
    ///
    /// Rules should already be validated; see `GridRules::validate`.
    #[must_use]
    pub fn new(rules: GridRules) -> Self {
        Self {
            grid: GridManager::new(rules),
            chunks: ChunkManager::new(rules.chunk_size),
        }
    }

    /// Get the grid manager.
    #[must_use]
    pub fn grid(&self) -> &GridManager {
        &self.grid
    }

    /// Get the chunk manager.
    #[must_use]
    pub fn chunks(&self) -> &ChunkManager {
        &self.chunks
    }

    /// Get the rules.
    #[must_use]
    pub fn rules(&self) -> &GridRules {
        self.grid.rules()
    }

    /// 4-connected neighbors in `[E, W, N, S]` order.
    #[must_use]
    pub fn neighbors4(&self, coord: Coord) -> [Coord; 4] {
        neighbors4(coord)
    }

    /// 8-connected neighbors, orthogonal first.
    #[must_use]
    pub fn neighbors8(&self, coord: Coord) -> [Coord; 8] {
        neighbors8(coord)
    }

    /// 8-connected neighbors that lie on the grid.
    #[must_use]
    pub fn neighbors8_in_bounds(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        neighbors8(coord)
            .into_iter()
            .filter(|&c| self.grid.is_in_bounds(c))
            .collect()
    }

    /// Bounded flood fill over the snapshot. See [`flood_fill`].
    pub fn flood_fill<F>(
        &self,
        seed: Coord,
        predicate: F,
        snapshot: &LocalSnapshot,
        bounds: Option<&Bounds>,
    ) -> Region
    where
        F: Fn(Coord, Option<PlayerId>) -> bool,
    {
        flood_fill(seed, predicate, snapshot, bounds)
    }

    /// Window loaded for a move at `target`: radius `max_bounding_box`.
    #[must_use]
    pub fn snapshot_window(&self, target: Coord) -> Bounds {
        Bounds::around(target, self.rules().max_bounding_box as i32)
    }

    /// May a move write `coord`? It must be on the grid and inside the
    /// loaded window, so unloaded stored state is never overwritten.
    #[must_use]
    pub fn is_writable(&self, snapshot: &LocalSnapshot, coord: Coord) -> bool {
        snapshot.window().contains(coord) && self.grid.is_in_bounds(coord)
    }

    /// Chunk containing `coord`.
    #[must_use]
    pub fn chunk_of(&self, coord: Coord) -> ChunkCoord {
        self.chunks.chunk_of(coord)
    }

    /// Exact, deduplicated set of chunks touched by `changed`.
    #[must_use]
    pub fn affected_chunks(&self, changed: &[Cell]) -> BTreeSet<ChunkCoord> {
        changed.iter().map(|c| self.chunks.chunk_of(c.coord)).collect()
    }
}
