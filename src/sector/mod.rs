//! Hex-grid data model: cells, the subsector arena, and graph traversal

pub mod bfs;
pub mod hex;
pub mod subsector;

pub use hex::{Hex, HexDirection};
pub use subsector::Subsector;
