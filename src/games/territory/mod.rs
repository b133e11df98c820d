//! Territory capture game.
//!
//! Players claim cells on a shared grid:
//! - A placement must touch the player's territory orthogonally, or
//!   diagonally through a pocket pinched by opponents
//! - Claiming a cell may cascade: neighbors crossing a majority threshold
//!   convert, and conversions keep spreading
//! - Any region the mover fully walls off is captured whole
//!
//! Supports any number of players.

mod legality;
mod cascade;
mod enclosure;
mod game;

pub use legality::can_place_at;
pub use cascade::{apply_grid_move, check_target, FLIP_THRESHOLD, UNOWNED_THRESHOLD};
pub use enclosure::{find_enclosed_areas, CAPTURED_FROM, SWEEP_PADDING};
pub use game::{GridMove, TerritoryConfig, TerritoryGame, TerritoryState};
