//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Number of rows in a subsector grid
pub const GRID_ROWS: usize = 8;

/// Number of columns in a subsector grid
pub const GRID_COLS: usize = 10;

/// Total cells in a subsector (8 rows x 10 columns)
pub const CELL_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Stable index of a cell in the subsector arena (row * 10 + col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub usize);

impl CellId {
    pub fn from_row_col(row: usize, col: usize) -> Self {
        Self(row * GRID_COLS + col)
    }

    pub fn row(&self) -> usize {
        self.0 / GRID_COLS
    }

    pub fn col(&self) -> usize {
        self.0 % GRID_COLS
    }

    /// Traveller-style four-digit hex label, column first, 1-based ("0101")
    pub fn hex_label(&self) -> String {
        format!("{:02}{:02}", self.col() + 1, self.row() + 1)
    }
}
