//! Cells and their per-game payload.
//!
//! A `Cell` is a coordinate, an owner, and an opaque payload. Cells are
//! created on first write; there is no deletion, a cell only becomes
//! unowned again when explicitly overwritten.
//!
//! Payload values are either an `Int` (player ids, counters) or a `Text`
//! marker such as `UNOWNED`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// Key for accessing payload entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayloadKey(pub String);

impl PayloadKey {
    /// Create a new payload key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for PayloadKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PayloadKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value of a payload entry.
///
/// The engine only writes the capture audit entry; everything else
/// belongs to the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PayloadValue {
    Int(i64),
    Text(String),
}

impl PayloadValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PayloadValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for PayloadValue {
    fn from(v: i64) -> Self {
        PayloadValue::Int(v)
    }
}

impl From<&str> for PayloadValue {
    fn from(v: &str) -> Self {
        PayloadValue::Text(v.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(v: String) -> Self {
        PayloadValue::Text(v)
    }
}

/// Owner recorded in an audit entry: the player id, or the text `unowned`.
impl From<Option<PlayerId>> for PayloadValue {
    fn from(owner: Option<PlayerId>) -> Self {
        match owner {
            Some(player) => PayloadValue::Int(i64::from(player.raw())),
            None => PayloadValue::Text(UNOWNED.to_string()),
        }
    }
}

/// Text marker for "no owner" in payload audit entries.
pub const UNOWNED: &str = "unowned";

/// Collection of payload entries.
pub type Payload = FxHashMap<PayloadKey, PayloadValue>;

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    /// `None` when unowned.
    pub owner: Option<PlayerId>,
    pub payload: Payload,
}

impl Cell {
    /// Create an unowned cell with an empty payload.
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            owner: None,
            payload: Payload::default(),
        }
    }

    /// Create a cell owned by `owner`.
    #[must_use]
    pub fn owned(coord: Coord, owner: PlayerId) -> Self {
        Self {
            coord,
            owner: Some(owner),
            payload: Payload::default(),
        }
    }

    /// Add a payload entry.
    #[must_use]
    pub fn with_payload(mut self, key: impl Into<PayloadKey>, value: impl Into<PayloadValue>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Look up a payload entry.
    #[must_use]
    pub fn payload_value(&self, key: &str) -> Option<&PayloadValue> {
        self.payload.get(&PayloadKey::new(key))
    }
}
