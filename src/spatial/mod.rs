//! Spatial primitives shared by every grid game.
//!
//! - `neighbors`: fixed-order 4- and 8-connected offsets
//! - `snapshot`: per-move in-memory view of the board
//! - `flood`: bounded BFS producing `Region`s
//! - `engine`: `SpatialEngine`, composing grid and chunk managers

pub mod neighbors;
pub mod snapshot;
pub mod flood;
pub mod engine;

pub use neighbors::{diagonals, neighbors4, neighbors8};
pub use snapshot::LocalSnapshot;
pub use flood::{flood_fill, Region, MAX_REGION_CELLS};
pub use engine::SpatialEngine;
