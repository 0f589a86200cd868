//! End-to-end generation tests: grid -> worlds -> lanes with seeded dice

use spinward::core::types::CellId;
use spinward::dice::SeededDice;
use spinward::sector::{HexDirection, Subsector};
use spinward::worldgen::SubsectorGenerator;

fn generate(seed: u64) -> Subsector {
    let mut generator = SubsectorGenerator::new(SeededDice::new(seed));
    generator.initialize("Integration");
    generator.generate_worlds().unwrap();
    generator.build_space_lanes().unwrap();
    generator.into_subsector().unwrap()
}

/// Shared invariant sweep over a generated subsector
fn assert_invariants(subsector: &Subsector) {
    // Topology: symmetric neighbor relation across all 80 cells
    for (id, hex) in subsector.cells() {
        for dir in HexDirection::ALL {
            if let Some(neighbor) = hex.neighbor(dir) {
                assert_eq!(
                    subsector.cell(neighbor).neighbor(dir.opposite()),
                    Some(id)
                );
            }
        }
    }

    for (id, world) in subsector.worlds() {
        // Every key and the tech level floored at zero
        assert!(world.size.key >= 0);
        assert!(world.atmosphere.key >= 0);
        assert!(world.hydrographics.key >= 0);
        assert!(world.population.key >= 0);
        assert!(world.government.key >= 0);
        assert!(world.law_level.key >= 0);
        assert!(world.tech_level >= 0);

        // Psionic institutes need population above 9
        if world.population.key <= 9 {
            assert!(!world.has_psionic_institute);
        }

        // Lane lists carry no duplicates and no self-edges
        let mut targets = world.lanes.clone();
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), world.lanes.len());
        assert!(!world.lanes.contains(&id));

        // Undirected: every lane has its mirror on a world-bearing cell
        for &target in &world.lanes {
            let partner = subsector
                .cell(target)
                .world
                .as_ref()
                .expect("lane points at an empty hex");
            assert!(partner.lanes.contains(&id), "missing mirror lane");
        }
    }
}

#[test]
fn test_generated_subsector_upholds_invariants() {
    for seed in [0u64, 1, 42, 1234, 987654321] {
        let subsector = generate(seed);
        assert_invariants(&subsector);
    }
}

#[test]
fn test_same_seed_reproduces_subsector_exactly() {
    let first = generate(42);
    let second = generate(42);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_different_seeds_diverge() {
    let first = generate(1);
    let second = generate(2);
    assert_ne!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_serde_round_trip_preserves_worlds_and_lanes() {
    let subsector = generate(42);
    let json = serde_json::to_string(&subsector).unwrap();
    let restored: Subsector = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.name, subsector.name);
    assert_eq!(restored.world_count(), subsector.world_count());
    for (id, world) in subsector.worlds() {
        let restored_world = restored.cell(id).world.as_ref().unwrap();
        assert_eq!(restored_world.uwp_code(), world.uwp_code());
        assert_eq!(restored_world.lanes, world.lanes);
    }
    assert_invariants(&restored);
}

#[test]
fn test_bias_seeding_flows_through_pipeline() {
    let mut generator = SubsectorGenerator::new(SeededDice::new(42));
    generator.initialize("Biased");
    let all: Vec<CellId> = (0..80).map(CellId).collect();
    generator.adjust_world_chance(&all, 10).unwrap();
    generator.generate_worlds().unwrap();
    generator.build_space_lanes().unwrap();
    let subsector = generator.into_subsector().unwrap();

    assert_eq!(subsector.world_count(), 80);
    assert_invariants(&subsector);
}
