//! Spinward - Classic Traveller subsector generation
//!
//! Builds an 8x10 hex subsector: per-hex world profiles derived from
//! chained dice rolls, then a trade-lane network between the worlds.

pub mod core;
pub mod dice;
pub mod sector;
pub mod worldgen;
