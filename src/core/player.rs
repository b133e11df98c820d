//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque owner identifier. A cell's owner is `Option<PlayerId>`, where
//! `None` means unowned. Because a cell holds exactly one `Option`, a cell
//! can never have two owners.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// The engine never interprets the number; orchestration layers map their
/// own user ids onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Is `owner` some player other than `self`?
    ///
    /// Unowned cells are not opponents.
    ///
    /// ```
    /// use rust_grid::core::PlayerId;
    ///
    /// let a = PlayerId::new(0);
    /// let b = PlayerId::new(1);
    /// assert!(a.is_opponent(Some(b)));
    /// assert!(!a.is_opponent(Some(a)));
    /// assert!(!a.is_opponent(None));
    /// ```
    #[must_use]
    pub fn is_opponent(self, owner: Option<PlayerId>) -> bool {
        matches!(owner, Some(other) if other != self)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
