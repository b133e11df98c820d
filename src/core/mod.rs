//! Core engine types: coordinates, players, cells, configuration, errors.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games configure these via `GridRules` rather than modifying the core.

pub mod coord;
pub mod player;
pub mod cell;
pub mod config;
pub mod error;

pub use coord::{Bounds, ChunkCoord, Coord};
pub use player::PlayerId;
pub use cell::{Cell, Payload, PayloadKey, PayloadValue, UNOWNED};
pub use config::{GridRules, MAX_BOUNDING_BOX};
pub use error::{MoveError, RulesError, StoreError, StoreResult};
