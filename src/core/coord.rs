//! Coordinate types.
//!
//! ## Coord
//!
//! Integer cell position. Used directly as a map key; ordering is
//! row-major (`x` first, then `y`) so ordered maps iterate the same way
//! the enclosure sweep does.
//!
//! ## ChunkCoord
//!
//! Index of a fixed-size tile. Derived from a `Coord`, never stored.
//!
//! ## Bounds
//!
//! Inclusive axis-aligned box used for snapshot windows and store loads.

use serde::{Deserialize, Serialize};

/// Integer cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`, saturating at the `i32` limits.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Squared Euclidean distance to another coordinate.
    #[must_use]
    pub fn distance_squared(self, other: Coord) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Chunk index: `floor(x / chunk_size), floor(y / chunk_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk({}, {})", self.x, self.y)
    }
}

/// Inclusive bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Create a box from its inclusive extents.
    #[must_use]
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Square box of half-width `radius` centered on `center`. Extents
    /// saturate at the `i32` limits.
    #[must_use]
    pub const fn around(center: Coord, radius: i32) -> Self {
        Self::new(
            center.x.saturating_sub(radius),
            center.x.saturating_add(radius),
            center.y.saturating_sub(radius),
            center.y.saturating_add(radius),
        )
    }

    /// This box grown by `amount` on every side, saturating.
    #[must_use]
    pub const fn padded(self, amount: i32) -> Self {
        Self::new(
            self.min_x.saturating_sub(amount),
            self.max_x.saturating_add(amount),
            self.min_y.saturating_sub(amount),
            self.max_y.saturating_add(amount),
        )
    }

    /// Does the box contain `coord` (perimeter included)?
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.min_x && coord.x <= self.max_x && coord.y >= self.min_y && coord.y <= self.max_y
    }

    /// Is `coord` strictly inside the box, off the perimeter?
    #[must_use]
    pub const fn contains_interior(&self, coord: Coord) -> bool {
        coord.x > self.min_x && coord.x < self.max_x && coord.y > self.min_y && coord.y < self.max_y
    }

    /// Is `coord` on the perimeter or outside the box?
    #[must_use]
    pub const fn touches_perimeter(&self, coord: Coord) -> bool {
        !self.contains_interior(coord)
    }

    /// Number of coordinates inside the box.
    #[must_use]
    pub fn area(&self) -> usize {
        if self.max_x < self.min_x || self.max_y < self.min_y {
            return 0;
        }
        let w = (i64::from(self.max_x) - i64::from(self.min_x) + 1) as usize;
        let h = (i64::from(self.max_y) - i64::from(self.min_y) + 1) as usize;
        w * h
    }

    /// Iterate every coordinate, `x` ascending outer and `y` ascending inner.
    pub fn iter(&self) -> impl Iterator<Item = Coord> {
        let (min_y, max_y) = (self.min_y, self.max_y);
        (self.min_x..=self.max_x).flat_map(move |x| (min_y..=max_y).map(move |y| Coord::new(x, y)))
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..={}, {}..={}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
