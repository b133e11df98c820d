//! Chunk tiling for change notifications.
//!
//! Chunks never partition storage. They only group changed cells so the
//! transport layer knows which subscribed viewports need a delta.

use std::collections::BTreeSet;

use crate::core::{Bounds, ChunkCoord, Coord};

/// Maps cells to fixed-size chunks.
#[derive(Clone, Copy, Debug)]
pub struct ChunkManager {
    chunk_size: i32,
}

impl ChunkManager {
    /// Create a chunk manager.
    ///
    /// Panics if `chunk_size` is zero or does not fit in `i32`; validated
    /// `GridRules` never trigger this.
    #[must_use]
    pub fn new(chunk_size: u32) -> Self {
        assert!(chunk_size > 0, "Chunk size must be positive");
        assert!(chunk_size <= i32::MAX as u32, "Chunk size must fit in i32");
        Self {
            chunk_size: chunk_size as i32,
        }
    }

    /// Get the chunk side length.
    #[must_use]
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size as u32
    }

    /// Chunk containing `coord`. Floor division, so `-1` lands in chunk `-1`.
    #[must_use]
    pub fn chunk_of(&self, coord: Coord) -> ChunkCoord {
        ChunkCoord::new(
            coord.x.div_euclid(self.chunk_size),
            coord.y.div_euclid(self.chunk_size),
        )
    }

    /// Every chunk whose tile intersects `bounds`.
    #[must_use]
    pub fn chunks_in_bounds(&self, bounds: &Bounds) -> BTreeSet<ChunkCoord> {
        if bounds.area() == 0 {
            return BTreeSet::new();
        }
        let lo = self.chunk_of(Coord::new(bounds.min_x, bounds.min_y));
        let hi = self.chunk_of(Coord::new(bounds.max_x, bounds.max_y));

        (lo.x..=hi.x)
            .flat_map(|cx| (lo.y..=hi.y).map(move |cy| ChunkCoord::new(cx, cy)))
            .collect()
    }

    /// The cells covered by `chunk`.
    #[must_use]
    pub fn chunk_bounds(&self, chunk: ChunkCoord) -> Bounds {
        let min_x = chunk.x * self.chunk_size;
        let min_y = chunk.y * self.chunk_size;
        Bounds::new(
            min_x,
            min_x.saturating_add(self.chunk_size - 1),
            min_y,
            min_y.saturating_add(self.chunk_size - 1),
        )
    }
}
