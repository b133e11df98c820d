//! Grid geometry.
//!
//! - `GridManager`: bounds, distance, radius enumeration
//! - `ChunkManager`: cell-to-chunk mapping for change notifications

pub mod manager;
pub mod chunk;

pub use manager::{GridManager, EDGE_MARGIN};
pub use chunk::ChunkManager;
