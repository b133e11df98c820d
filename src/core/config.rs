//! Grid configuration.
//!
//! Games configure the engine at startup with a `GridRules` value:
//! - finite or infinite coordinate space
//! - chunk size for change notifications
//! - snapshot radius (`max_bounding_box`) for each move
//!
//! Rules are plain data and can be loaded from JSON:
//!
//! ```
//! use rust_grid::core::GridRules;
//!
//! let rules = GridRules::from_json(
//!     r#"{"infinite": false, "width": 64, "height": 32, "chunkSize": 8, "maxBoundingBox": 6}"#,
//! ).unwrap();
//! assert_eq!(rules.width, 64);
//! assert_eq!(rules.chunk_size, 8);
//! ```

use serde::{Deserialize, Serialize};

use super::error::RulesError;

/// Largest accepted `max_bounding_box`.
pub const MAX_BOUNDING_BOX: u32 = 4096;

/// Geometry and windowing rules for one game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridRules {
    /// Infinite grids never reject coordinates on bounds.
    pub infinite: bool,

    /// Finite grid width. Ignored when `infinite`.
    pub width: u32,

    /// Finite grid height. Ignored when `infinite`.
    pub height: u32,

    /// Side length of a notification chunk, in cells.
    pub chunk_size: u32,

    /// Half-width of the snapshot window loaded for each move.
    pub max_bounding_box: u32,
}

impl Default for GridRules {
    fn default() -> Self {
        Self {
            infinite: false,
            width: 100,
            height: 100,
            chunk_size: 16,
            max_bounding_box: 10,
        }
    }
}

impl GridRules {
    /// Finite `width` x `height` grid with default chunking.
    #[must_use]
    pub fn finite(width: u32, height: u32) -> Self {
        Self {
            infinite: false,
            width,
            height,
            ..Self::default()
        }
    }

    /// Unbounded grid with default chunking.
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            infinite: true,
            ..Self::default()
        }
    }

    /// Set the chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the snapshot radius.
    #[must_use]
    pub fn with_max_bounding_box(mut self, radius: u32) -> Self {
        self.max_bounding_box = radius;
        self
    }

    /// Parse and validate rules from JSON.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(json).map_err(|e| RulesError::Json(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the rules describe a usable grid.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.chunk_size == 0 {
            return Err(RulesError::ZeroChunkSize);
        }
        if self.chunk_size > i32::MAX as u32 {
            return Err(RulesError::ChunkSizeTooLarge(self.chunk_size));
        }
        if self.max_bounding_box == 0 {
            return Err(RulesError::ZeroBoundingBox);
        }
        if self.max_bounding_box > MAX_BOUNDING_BOX {
            return Err(RulesError::BoundingBoxTooLarge(self.max_bounding_box));
        }
        if !self.infinite && (self.width == 0 || self.height == 0) {
            return Err(RulesError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Total number of cells on a finite grid, `None` when infinite.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        if self.infinite {
            None
        } else {
            Some(self.width as usize * self.height as usize)
        }
    }
}
