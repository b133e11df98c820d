//! Game rules capability trait.
//!
//! Games implement `GameRules` to define:
//! - Whether a move is legal
//! - How a move mutates the board
//! - Scoring and win conditions
//!
//! Every failure is returned as a value. The transport layer receives a
//! `MoveReport` and forwards its chunks; the engine itself never emits
//! events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, ChunkCoord, MoveError, PlayerId, StoreError};

/// Outcome of validating a move without applying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveValidation {
    pub is_valid: bool,
    pub error: Option<MoveError>,
}

impl MoveValidation {
    /// A legal move.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// An illegal move and the reason.
    #[must_use]
    pub fn invalid(error: MoveError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }

    /// Convert to a `Result`.
    pub fn into_result(self) -> Result<(), MoveError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl From<Result<(), MoveError>> for MoveValidation {
    fn from(result: Result<(), MoveError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err),
        }
    }
}

/// Cells changed by a committed move and the chunks they fall in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Final state of each changed cell, each exactly once.
    pub changed_cells: Vec<Cell>,

    /// Sorted, deduplicated chunks of `changed_cells`.
    pub affected_chunks: Vec<ChunkCoord>,
}

/// Flattened move result for the transport layer.
///
/// ```
/// use rust_grid::core::MoveError;
/// use rust_grid::rules::{MoveOutcome, MoveReport};
///
/// let report = MoveReport::from(Err::<MoveOutcome, _>(MoveError::AlreadyOwned));
/// assert!(!report.success);
/// assert_eq!(report.error.as_deref(), Some("Cell already owned by you"));
///
/// let bytes = report.to_bytes().unwrap();
/// assert_eq!(MoveReport::from_bytes(&bytes).unwrap(), report);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReport {
    pub success: bool,
    pub error: Option<String>,
    pub changed_cells: Vec<Cell>,
    pub affected_chunks: Vec<ChunkCoord>,
}

impl MoveReport {
    /// Encode for message passing.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a report produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl From<Result<MoveOutcome, MoveError>> for MoveReport {
    fn from(result: Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                error: None,
                changed_cells: outcome.changed_cells,
                affected_chunks: outcome.affected_chunks,
            },
            Err(err) => Self {
                success: false,
                error: Some(err.to_string()),
                changed_cells: Vec::new(),
                affected_chunks: Vec::new(),
            },
        }
    }
}

/// Result of a win-condition check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinCheck {
    pub has_winner: bool,
    pub winner: Option<PlayerId>,
    pub reason: Option<String>,
}

impl WinCheck {
    /// Game continues.
    #[must_use]
    pub fn ongoing() -> Self {
        Self::default()
    }

    /// Game over with a winner.
    #[must_use]
    pub fn winner(player: PlayerId, reason: impl Into<String>) -> Self {
        Self {
            has_winner: true,
            winner: Some(player),
            reason: Some(reason.into()),
        }
    }

    /// Game over without a winner.
    #[must_use]
    pub fn draw(reason: impl Into<String>) -> Self {
        Self {
            has_winner: false,
            winner: None,
            reason: Some(reason.into()),
        }
    }
}

/// Owned-cell counts per player.
pub type Scores = BTreeMap<PlayerId, usize>;

/// Rules capability trait.
///
/// Games implement this on top of a `SpatialEngine` and a `CellStore`.
/// The orchestration layer calls these methods and must serialize moves
/// per game instance; implementations do no locking of their own.
///
/// ## Implementation Notes
///
/// - `validate_move`: no mutation, ever
/// - `apply_move`: one transaction; on `Err` nothing is committed
/// - `calculate_score` / `check_win_condition`: read-only
pub trait GameRules {
    /// Move description accepted by this game.
    type Move;

    /// Game-specific state snapshot.
    type State;

    /// Check a move without applying it.
    fn validate_move(&self, player: PlayerId, mv: &Self::Move) -> MoveValidation;

    /// Apply a move as a single transaction.
    fn apply_move(&mut self, player: PlayerId, mv: &Self::Move) -> Result<MoveOutcome, MoveError>;

    /// Owned-cell count per player.
    fn calculate_score(&self) -> Result<Scores, StoreError>;

    /// Has someone won?
    fn check_win_condition(&self) -> Result<WinCheck, StoreError>;

    /// Game-specific state snapshot.
    fn game_state(&self) -> Result<Self::State, StoreError>;

    // === Convenience Methods ===

    /// Apply a move and flatten the result for the transport layer.
    fn apply_move_report(&mut self, player: PlayerId, mv: &Self::Move) -> MoveReport {
        self.apply_move(player, mv).into()
    }
}
