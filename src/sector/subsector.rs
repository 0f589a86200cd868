//! The subsector: a fixed 8x10 arena of hex cells with wired topology
//!
//! Topology is immutable after construction. Row parity decides which
//! diagonal offsets apply: odd rows are shifted right relative to even
//! rows, so their south-east neighbor is one column over.

use serde::{Deserialize, Serialize};

use crate::core::types::{CellId, CELL_COUNT, GRID_COLS, GRID_ROWS};
use crate::sector::hex::{Hex, HexDirection};
use crate::worldgen::world::World;

/// An 8x10 hex region of space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsector {
    pub name: String,
    cells: Vec<Hex>,
}

impl Subsector {
    /// Build the grid and wire all neighbor relations
    ///
    /// Each connection is set once in a forward direction (east, and the
    /// two downward diagonals); the reciprocal slot is filled by `link`.
    pub fn new(name: impl Into<String>) -> Self {
        let mut subsector = Self {
            name: name.into(),
            cells: (0..CELL_COUNT).map(|_| Hex::new()).collect(),
        };

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let index = row * GRID_COLS + col;

                if col < GRID_COLS - 1 {
                    subsector.link(index, HexDirection::East, index + 1);
                }

                let last_row = row == GRID_ROWS - 1;
                if row % 2 == 1 {
                    // Odd rows sit offset right: SE gains a column
                    if !last_row && col < GRID_COLS - 1 {
                        subsector.link(index, HexDirection::SouthEast, (row + 1) * GRID_COLS + col + 1);
                    }
                    if !last_row {
                        subsector.link(index, HexDirection::SouthWest, (row + 1) * GRID_COLS + col);
                    }
                } else {
                    if !last_row {
                        subsector.link(index, HexDirection::SouthEast, (row + 1) * GRID_COLS + col);
                    }
                    if !last_row && col > 0 {
                        subsector.link(index, HexDirection::SouthWest, (row + 1) * GRID_COLS + col - 1);
                    }
                }
            }
        }

        subsector
    }

    /// Wire both sides of a neighbor relation
    fn link(&mut self, index: usize, direction: HexDirection, neighbor: usize) {
        self.cells[index].neighbors[direction.index()] = Some(CellId(neighbor));
        self.cells[neighbor].neighbors[direction.opposite().index()] = Some(CellId(index));
    }

    pub fn cell(&self, id: CellId) -> &Hex {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Hex {
        &mut self.cells[id.0]
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Hex)> {
        self.cells.iter().enumerate().map(|(i, hex)| (CellId(i), hex))
    }

    /// Cells holding a world, in ascending index order
    pub fn worlds(&self) -> impl Iterator<Item = (CellId, &World)> {
        self.cells()
            .filter_map(|(id, hex)| hex.world.as_ref().map(|world| (id, world)))
    }

    pub fn world_count(&self) -> usize {
        self.cells.iter().filter(|hex| hex.has_world()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsector_has_eighty_cells() {
        let subsector = Subsector::new("Test");
        assert_eq!(subsector.cells().count(), 80);
        assert_eq!(subsector.world_count(), 0);
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        let subsector = Subsector::new("Test");
        for (id, hex) in subsector.cells() {
            for dir in HexDirection::ALL {
                if let Some(neighbor_id) = hex.neighbor(dir) {
                    let back = subsector.cell(neighbor_id).neighbor(dir.opposite());
                    assert_eq!(back, Some(id), "asymmetric link {:?} -> {:?}", id, neighbor_id);
                }
            }
        }
    }

    #[test]
    fn test_interior_cells_have_six_neighbors() {
        let subsector = Subsector::new("Test");
        for row in 1..GRID_ROWS - 1 {
            for col in 1..GRID_COLS - 1 {
                let id = CellId::from_row_col(row, col);
                assert_eq!(
                    subsector.cell(id).neighbor_ids().count(),
                    6,
                    "interior cell {:?} missing neighbors",
                    id
                );
            }
        }
    }

    #[test]
    fn test_corner_cells_have_fewer_neighbors() {
        let subsector = Subsector::new("Test");
        // Top-left on an even row: east plus south-east only
        let top_left = subsector.cell(CellId::from_row_col(0, 0));
        assert_eq!(top_left.neighbor_ids().count(), 2);
        assert_eq!(top_left.neighbor(HexDirection::East), Some(CellId(1)));
        assert_eq!(
            top_left.neighbor(HexDirection::SouthEast),
            Some(CellId::from_row_col(1, 0))
        );

        // Bottom row is odd (row 7), so its corners have no downward links
        let bottom_right = subsector.cell(CellId::from_row_col(7, 9));
        assert!(bottom_right.neighbor(HexDirection::SouthEast).is_none());
        assert!(bottom_right.neighbor(HexDirection::SouthWest).is_none());
    }

    #[test]
    fn test_row_parity_offsets() {
        let subsector = Subsector::new("Test");
        // Even row: SE is straight down, SW is down-left
        let even = subsector.cell(CellId::from_row_col(2, 5));
        assert_eq!(even.neighbor(HexDirection::SouthEast), Some(CellId::from_row_col(3, 5)));
        assert_eq!(even.neighbor(HexDirection::SouthWest), Some(CellId::from_row_col(3, 4)));

        // Odd row: SE is down-right, SW is straight down
        let odd = subsector.cell(CellId::from_row_col(3, 5));
        assert_eq!(odd.neighbor(HexDirection::SouthEast), Some(CellId::from_row_col(4, 6)));
        assert_eq!(odd.neighbor(HexDirection::SouthWest), Some(CellId::from_row_col(4, 5)));
    }

    #[test]
    fn test_no_cell_links_to_itself_or_duplicates() {
        let subsector = Subsector::new("Test");
        for (id, hex) in subsector.cells() {
            let ids: Vec<_> = hex.neighbor_ids().collect();
            assert!(!ids.contains(&id));
            let mut unique = ids.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), ids.len());
        }
    }
}
