//! World generation pipeline: grid -> worlds -> lanes
//!
//! [`SubsectorGenerator`] drives the three phases in order and rejects
//! calls made before their predecessor phase has run.

pub mod generator;
pub mod lanes;
pub mod world;

pub use generator::generate_worlds;
pub use lanes::build_space_lanes;
pub use world::{PlanetProperty, StarportClass, World};

use crate::core::error::{Result, SubsectorError};
use crate::core::types::{CellId, CELL_COUNT};
use crate::dice::Dice;
use crate::sector::subsector::Subsector;

/// Single-pass pipeline driver over one subsector
pub struct SubsectorGenerator<D: Dice> {
    subsector: Option<Subsector>,
    worlds_generated: bool,
    dice: D,
}

impl<D: Dice> SubsectorGenerator<D> {
    pub fn new(dice: D) -> Self {
        Self {
            subsector: None,
            worlds_generated: false,
            dice,
        }
    }

    /// Build the empty grid
    pub fn initialize(&mut self, name: impl Into<String>) {
        self.subsector = Some(Subsector::new(name));
        self.worlds_generated = false;
    }

    /// Bias the world-presence roll for specific hexes
    ///
    /// Must run after `initialize` and, to have any effect, before
    /// `generate_worlds`.
    pub fn adjust_world_chance(&mut self, cells: &[CellId], modifier: i32) -> Result<()> {
        let subsector = self.subsector.as_mut().ok_or(SubsectorError::NotInitialized)?;
        for &id in cells {
            if id.0 >= CELL_COUNT {
                return Err(SubsectorError::InvalidHexIndex(id.0));
            }
            subsector.cell_mut(id).generation_bias += modifier;
        }
        Ok(())
    }

    /// Phase 2: populate cells with worlds
    pub fn generate_worlds(&mut self) -> Result<()> {
        let subsector = self.subsector.as_mut().ok_or(SubsectorError::NotInitialized)?;
        generate_worlds(subsector, &mut self.dice);
        self.worlds_generated = true;
        Ok(())
    }

    /// Phase 3: connect worlds with trade lanes
    pub fn build_space_lanes(&mut self) -> Result<()> {
        let subsector = self.subsector.as_mut().ok_or(SubsectorError::NotInitialized)?;
        if !self.worlds_generated {
            return Err(SubsectorError::WorldsNotGenerated);
        }
        build_space_lanes(subsector, &mut self.dice);
        Ok(())
    }

    pub fn subsector(&self) -> Option<&Subsector> {
        self.subsector.as_ref()
    }

    pub fn into_subsector(self) -> Result<Subsector> {
        self.subsector.ok_or(SubsectorError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SeededDice;

    fn generator() -> SubsectorGenerator<SeededDice> {
        SubsectorGenerator::new(SeededDice::new(42))
    }

    #[test]
    fn test_full_pipeline_runs() {
        let mut gen = generator();
        gen.initialize("Trailing Coreward");
        gen.generate_worlds().unwrap();
        gen.build_space_lanes().unwrap();
        let subsector = gen.into_subsector().unwrap();
        assert_eq!(subsector.name, "Trailing Coreward");
        assert_eq!(subsector.cells().count(), 80);
    }

    #[test]
    fn test_generate_worlds_requires_initialization() {
        let mut gen = generator();
        assert!(matches!(
            gen.generate_worlds(),
            Err(SubsectorError::NotInitialized)
        ));
    }

    #[test]
    fn test_lanes_require_worlds() {
        let mut gen = generator();
        assert!(matches!(
            gen.build_space_lanes(),
            Err(SubsectorError::NotInitialized)
        ));

        gen.initialize("Test");
        assert!(matches!(
            gen.build_space_lanes(),
            Err(SubsectorError::WorldsNotGenerated)
        ));
    }

    #[test]
    fn test_adjust_world_chance_validates_indices() {
        let mut gen = generator();
        assert!(matches!(
            gen.adjust_world_chance(&[CellId(0)], 1),
            Err(SubsectorError::NotInitialized)
        ));

        gen.initialize("Test");
        gen.adjust_world_chance(&[CellId(3), CellId(17)], 2).unwrap();
        assert_eq!(gen.subsector().unwrap().cell(CellId(3)).generation_bias, 2);
        assert_eq!(gen.subsector().unwrap().cell(CellId(17)).generation_bias, 2);

        assert!(matches!(
            gen.adjust_world_chance(&[CellId(80)], 1),
            Err(SubsectorError::InvalidHexIndex(80))
        ));
    }

    #[test]
    fn test_into_subsector_before_initialize_fails() {
        assert!(matches!(
            generator().into_subsector(),
            Err(SubsectorError::NotInitialized)
        ));
    }
}
