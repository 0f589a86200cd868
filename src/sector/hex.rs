//! A single hex cell: six neighbor slots, optional world, presence bias

use serde::{Deserialize, Serialize};

use crate::core::types::CellId;
use crate::worldgen::world::World;

/// The six directions around a flat-top hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    East = 0,
    NorthEast = 1,
    NorthWest = 2,
    West = 3,
    SouthWest = 4,
    SouthEast = 5,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The reciprocal direction: (d + 3) mod 6
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

/// One hex in the subsector grid
///
/// Neighbor slots hold cell indices rather than references, so the cyclic
/// neighbor and lane relations stay ownership-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hex {
    /// Neighbor cell per direction; edge and corner cells leave slots empty
    pub neighbors: [Option<CellId>; 6],
    /// At most one world per hex
    pub world: Option<World>,
    /// Modifier applied to this hex's world-presence roll
    pub generation_bias: i32,
}

impl Default for Hex {
    fn default() -> Self {
        Self {
            neighbors: [None; 6],
            world: None,
            generation_bias: 0,
        }
    }
}

impl Hex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn neighbor(&self, direction: HexDirection) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    /// Populated neighbor slots, in direction order
    pub fn neighbor_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    pub fn has_world(&self) -> bool {
        self.world.is_some()
    }
}
