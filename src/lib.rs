//! # rust-grid
//!
//! A spatial-mutation engine for turn-based, grid-addressed multiplayer games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: Coordinates, neighbors, flood fill, chunking
//!    and snapshots know nothing about any game. Games compose them.
//!
//! 2. **N-Player First**: Ownership is an optional `PlayerId`. No API
//!    assumes two players.
//!
//! 3. **Configuration Over Convention**: Grid shape, chunk size and
//!    snapshot radius come from `GridRules` at startup.
//!
//! ## Architecture
//!
//! - **Snapshot Per Move**: A move loads one bounded window from the
//!   `CellStore`, mutates it in memory, and saves the changed cells in a
//!   single batch. A failure at any step commits nothing.
//!
//! - **Chunked Notifications**: Every committed move reports the exact set
//!   of chunks its changed cells fall in.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, cells, configuration, errors
//! - `grid`: Bounds checks and cell-to-chunk mapping
//! - `spatial`: Neighbors, snapshots, bounded flood fill, `SpatialEngine`
//! - `store`: `CellStore` trait and the in-memory store
//! - `rules`: `GameRules` trait and move results
//! - `games`: Game implementations (territory capture)

pub mod core;
pub mod grid;
pub mod spatial;
pub mod store;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Bounds, ChunkCoord, Coord,
    PlayerId,
    Cell, Payload, PayloadKey, PayloadValue,
    GridRules,
    MoveError, RulesError, StoreError, StoreResult,
};

pub use crate::grid::{ChunkManager, GridManager};

pub use crate::spatial::{LocalSnapshot, Region, SpatialEngine, MAX_REGION_CELLS};

pub use crate::store::{CellStore, MemoryCellStore};

pub use crate::rules::{GameRules, MoveOutcome, MoveReport, MoveValidation, Scores, WinCheck};

pub use crate::games::territory::{GridMove, TerritoryConfig, TerritoryGame, TerritoryState};
