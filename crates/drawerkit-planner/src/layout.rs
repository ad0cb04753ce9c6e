//! Plate layout model.
//!
//! Value types describing how a split baseplate covers a drawer: one
//! [`PlatePiece`] per grid position, collected row-major into a
//! [`PlateLayout`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One piece of a (possibly split) baseplate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatePiece {
    /// Piece width in grid units.
    pub units_wide: u32,
    /// Piece depth in grid units.
    pub units_deep: u32,
    /// Zero-indexed column within the layout grid.
    pub column: usize,
    /// Zero-indexed row within the layout grid.
    pub row: usize,
    /// Physical copies to produce for this grid position.
    pub print_count: u32,
}

/// The 2-D composition of two independent axis plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateLayout {
    /// Whether the baseplate had to be split at all.
    pub is_split: bool,
    /// Total number of pieces in the grid.
    pub total_pieces: usize,
    /// Unit counts per column, left to right.
    pub width_plan: Vec<u32>,
    /// Unit counts per row, front to back.
    pub depth_plan: Vec<u32>,
    /// Row-major piece descriptors, one per grid position.
    pub pieces: Vec<PlatePiece>,
}

impl PlateLayout {
    /// Compose two axis plans into the full Cartesian grid.
    pub fn from_plans(width_plan: Vec<u32>, depth_plan: Vec<u32>) -> Self {
        let total = width_plan.len() * depth_plan.len();

        let mut pieces = Vec::with_capacity(total);
        for (row, &units_deep) in depth_plan.iter().enumerate() {
            for (column, &units_wide) in width_plan.iter().enumerate() {
                pieces.push(PlatePiece {
                    units_wide,
                    units_deep,
                    column,
                    row,
                    print_count: 1,
                });
            }
        }

        Self {
            is_split: total > 1,
            total_pieces: total,
            width_plan,
            depth_plan,
            pieces,
        }
    }

    /// Number of rows in the layout grid.
    pub fn rows(&self) -> usize {
        self.depth_plan.len()
    }

    /// Number of columns in the layout grid.
    pub fn columns(&self) -> usize {
        self.width_plan.len()
    }

    /// The piece at a grid position, if in bounds.
    pub fn piece_at(&self, column: usize, row: usize) -> Option<&PlatePiece> {
        if column >= self.columns() || row >= self.rows() {
            return None;
        }
        self.pieces.get(row * self.columns() + column)
    }

    /// Occurrence count per distinct piece size.
    ///
    /// Maps `(units_wide, units_deep)` to the number of grid positions with
    /// that size, so production can print N copies of one model instead of
    /// N separate models. Counts always sum to `total_pieces`.
    pub fn distinct_pieces(&self) -> BTreeMap<(u32, u32), u32> {
        let mut counts = BTreeMap::new();
        for piece in &self.pieces {
            *counts.entry((piece.units_wide, piece.units_deep)).or_insert(0) += 1;
        }
        counts
    }
}
