//! Error types.
//!
//! Every failure a move can hit is a value of `MoveError`. Nothing in the
//! engine panics on bad input or store failures.

use thiserror::Error;

/// Failure reported by a `CellStore`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the batch. Nothing from it was committed.
    #[error("store rejected batch: {0}")]
    Rejected(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Invalid `GridRules`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("chunk size must be positive")]
    ZeroChunkSize,

    #[error("chunk size {0} does not fit in a coordinate")]
    ChunkSizeTooLarge(u32),

    #[error("finite grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("max bounding box must be positive")]
    ZeroBoundingBox,

    #[error("max bounding box {0} exceeds {max}", max = super::config::MAX_BOUNDING_BOX)]
    BoundingBoxTooLarge(u32),

    #[error("invalid rules json: {0}")]
    Json(String),
}

/// Why a move was rejected.
///
/// The `Display` text of the first two variants is part of the public
/// contract; clients match on it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Cell already owned by you")]
    AlreadyOwned,

    #[error("Need 5+ neighbors to flip opponent cell")]
    InsufficientNeighbors,

    #[error("Invalid move: ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("Invalid move: ({x}, {y}) is not connected to your territory")]
    NotAdjacent { x: i32, y: i32 },

    /// Load or save failed. The move is aborted with nothing committed.
    #[error("Move aborted: {0}")]
    Store(#[from] StoreError),
}
