//! Per-hex world generation: chained table-driven dice rolls
//!
//! Cells are processed in ascending index order. With a seeded dice
//! source that order fixes the roll sequence, so the same seed always
//! produces the same subsector.

use crate::core::types::{CellId, CELL_COUNT};
use crate::dice::Dice;
use crate::sector::subsector::Subsector;
use crate::worldgen::world::{PlanetProperty, StarportClass, World};

/// 1d6 target for a hex to hold a world, before per-hex bias
pub const WORLD_PRESENCE_TARGET: i32 = 4;

/// 2d6 target for a psionic institute (modifier: population - 9)
const PSIONIC_INSTITUTE_TARGET: i32 = 11;

/// Roll world presence for every cell and attach full profiles
pub fn generate_worlds<D: Dice>(subsector: &mut Subsector, dice: &mut D) {
    for index in 0..CELL_COUNT {
        let id = CellId(index);
        let bias = subsector.cell(id).generation_bias;
        if !dice.check_single(WORLD_PRESENCE_TARGET, bias) {
            continue;
        }
        let world = roll_world(dice);
        tracing::debug!(
            "World generated at {}: {} tech {}",
            id.hex_label(),
            world.uwp_code(),
            world.tech_level
        );
        subsector.cell_mut(id).world = Some(world);
    }
    tracing::info!(
        "World generation complete: {} of {} hexes populated",
        subsector.world_count(),
        CELL_COUNT
    );
}

/// Derive one full world profile
///
/// Roll order matters for seeded reproducibility: starport, bases, size,
/// atmosphere, hydrographics, population, government, law, tech, drugs,
/// psionics.
pub fn roll_world<D: Dice>(dice: &mut D) -> World {
    let starport = StarportClass::from_standard_roll(dice.standard_roll(0));

    let has_naval_base = match starport.naval_base_target() {
        Some(target) => dice.check_standard(target, 0),
        None => false,
    };
    let has_scout_base = match starport.scout_base_target() {
        Some(target) => dice.check_standard(target, 0),
        None => false,
    };

    let size = PlanetProperty::size(dice.standard_roll(-2).max(0));

    let atmosphere = if size.key == 0 {
        PlanetProperty::atmosphere(0)
    } else {
        PlanetProperty::atmosphere(dice.standard_roll(size.key - 7).max(0))
    };

    let hydrographics = if atmosphere.key == 0 || atmosphere.key == 1 {
        PlanetProperty::hydrographics(0)
    } else {
        let mut modifier = size.key - 7;
        if atmosphere.key == 0 || atmosphere.key == 1 || atmosphere.key > 9 {
            modifier -= 4;
        }
        PlanetProperty::hydrographics(dice.standard_roll(modifier).max(0))
    };

    let population = PlanetProperty::population(dice.standard_roll(-2).max(0));
    let government = PlanetProperty::government(dice.standard_roll(population.key - 7).max(0));
    let law_level = PlanetProperty::law_level(dice.standard_roll(government.key - 7).max(0));

    let tech_modifier = tech_level_modifier(
        starport,
        size.key,
        atmosphere.key,
        hydrographics.key,
        population.key,
        government.key,
    );
    let tech_level = dice.standard_roll(tech_modifier).max(0);

    // Classic quirk kept as written: law level 0 makes legality automatic
    let drugs_legal = dice.check_standard(law_level.key, 0);

    let has_psionic_institute = if population.key > 9 {
        dice.check_standard(PSIONIC_INSTITUTE_TARGET, population.key - 9)
    } else {
        false
    };

    World {
        starport,
        has_naval_base,
        has_scout_base,
        size,
        atmosphere,
        hydrographics,
        population,
        government,
        law_level,
        tech_level,
        drugs_legal,
        has_psionic_institute,
        lanes: Vec::new(),
    }
}

/// Cumulative tech-level roll modifier from the rest of the profile
fn tech_level_modifier(
    starport: StarportClass,
    size: i32,
    atmosphere: i32,
    hydrographics: i32,
    population: i32,
    government: i32,
) -> i32 {
    let mut modifier = starport.tech_modifier();

    modifier += match size {
        0..=1 => 2,
        2..=4 => 1,
        _ => 0,
    };
    modifier += match atmosphere {
        0..=3 => 1,
        10..=14 => 1,
        _ => 0,
    };
    // Non-positive term: every point of hydrographics below 8 costs one
    modifier += (hydrographics - 8).min(0);
    modifier += match population {
        1..=5 => 1,
        9 => 2,
        10 => 4,
        _ => 0,
    };
    modifier += match government {
        0 => 1,
        5 => 1,
        13 => -2,
        _ => 0,
    };

    modifier
}
