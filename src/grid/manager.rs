//! Grid manager: bounds checks, distance, radius enumeration.

use crate::core::{Bounds, Coord, GridRules, MoveError};

/// Cells kept clear of the `i32` limits on top of the snapshot radius.
/// Windows, sweeps and flood fills around any in-bounds coordinate stay
/// inside this margin, so their arithmetic never overflows.
pub const EDGE_MARGIN: i32 = 1024;

/// Answers geometric questions about a finite or infinite grid.
///
/// ## Usage
///
/// ```
/// use rust_grid::core::{Coord, GridRules};
/// use rust_grid::grid::GridManager;
///
/// let grid = GridManager::new(GridRules::finite(4, 4));
/// assert!(grid.is_in_bounds(Coord::new(3, 0)));
/// assert!(!grid.is_in_bounds(Coord::new(4, 0)));
///
/// // Radius 1 around a corner: the corner and its two in-bounds neighbors.
/// assert_eq!(grid.cells_in_radius(Coord::new(0, 0), 1).len(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridManager {
    rules: GridRules,
}

impl GridManager {
    /// Create a grid manager for the given rules.
    #[must_use]
    pub fn new(rules: GridRules) -> Self {
        Self { rules }
    }

    /// Get the rules this manager enforces.
    #[must_use]
    pub fn rules(&self) -> &GridRules {
        &self.rules
    }

    /// Is the coordinate on the grid?
    ///
    /// The last `max_bounding_box + EDGE_MARGIN` values before either `i32`
    /// limit are off-grid everywhere. Past that, infinite grids accept
    /// every coordinate.
    #[must_use]
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        if !self.within_limits(coord) {
            return false;
        }
        if self.rules.infinite {
            return true;
        }
        coord.x >= 0
            && coord.y >= 0
            && i64::from(coord.x) < i64::from(self.rules.width)
            && i64::from(coord.y) < i64::from(self.rules.height)
    }

    fn within_limits(&self, coord: Coord) -> bool {
        let reach = i64::from(self.rules.max_bounding_box) + i64::from(EDGE_MARGIN);
        let lo = i64::from(i32::MIN) + reach;
        let hi = i64::from(i32::MAX) - reach;
        let fits = |v: i32| (lo..=hi).contains(&i64::from(v));
        fits(coord.x) && fits(coord.y)
    }

    /// Reject off-grid coordinates with `MoveError::OutOfBounds`.
    pub fn validate_coord(&self, coord: Coord) -> Result<(), MoveError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })
        }
    }

    /// Euclidean distance between two coordinates.
    #[must_use]
    pub fn distance(&self, a: Coord, b: Coord) -> f64 {
        (a.distance_squared(b) as f64).sqrt()
    }

    /// All in-bounds coordinates within `radius` of `center`.
    ///
    /// Row-major order: `x` ascending outer, `y` ascending inner. Callers
    /// that take the first match rely on this order.
    #[must_use]
    pub fn cells_in_radius(&self, center: Coord, radius: i32) -> Vec<Coord> {
        if radius < 0 {
            return Vec::new();
        }
        let r2 = i64::from(radius) * i64::from(radius);
        Bounds::around(center, radius)
            .iter()
            .filter(|&c| c.distance_squared(center) <= r2 && self.is_in_bounds(c))
            .collect()
    }

    /// Intersect `bounds` with the grid. `None` when they do not overlap.
    ///
    /// Infinite grids return `bounds` unchanged.
    #[must_use]
    pub fn clamp_bounds(&self, bounds: Bounds) -> Option<Bounds> {
        if self.rules.infinite {
            return Some(bounds);
        }
        let max_x = i64::from(self.rules.width) - 1;
        let max_y = i64::from(self.rules.height) - 1;
        let clamped = Bounds::new(
            bounds.min_x.max(0),
            i64::from(bounds.max_x).min(max_x) as i32,
            bounds.min_y.max(0),
            i64::from(bounds.max_y).min(max_y) as i32,
        );
        if clamped.area() == 0 {
            None
        } else {
            Some(clamped)
        }
    }
}
