//! Rules capability trait for game implementations.
//!
//! Games implement `GameRules` to define:
//! - Legal moves for a board state
//! - How moves mutate the board
//! - Scores and win conditions
//!
//! The spatial core calls into nothing game-specific; games compose it.

pub mod engine;

pub use engine::{GameRules, MoveOutcome, MoveReport, MoveValidation, Scores, WinCheck};
