//! Games built on the spatial engine.
//!
//! - `territory`: multiplayer territory capture with cascades and enclosures

pub mod territory;
