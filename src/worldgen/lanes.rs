//! Space-lane construction: bounded neighbor mapping plus probability rolls
//!
//! Lanes are considered by ascending jump distance so short, cheap routes
//! land before expensive long ones, and a candidate pair is skipped when
//! any route (direct or indirect) already connects it. The result is a
//! sparse, opportunistically connected trade network rather than a mesh.

use ahash::{AHashMap, AHashSet};

use crate::core::types::{CellId, CELL_COUNT};
use crate::dice::Dice;
use crate::sector::bfs;
use crate::sector::subsector::Subsector;
use crate::worldgen::world::StarportClass;

/// Maximum jump distance a lane can span
pub const MAX_JUMP: usize = 4;

/// 1d6 target for pairs absent from the table; unreachable on one die
pub const UNREACHABLE_TARGET: i32 = 7;

/// Lane probability matrix: (sorted starport pair, jump distance) -> 1d6 target
#[derive(Debug, Clone)]
pub struct LaneTable {
    targets: AHashMap<(StarportClass, StarportClass, usize), i32>,
}

impl LaneTable {
    /// The Classic Traveller route table
    pub fn standard() -> Self {
        use StarportClass::{A, B, C, D, E};
        let entries = [
            // Jump-1
            ((A, A, 1), 1),
            ((A, B, 1), 1),
            ((A, C, 1), 1),
            ((A, D, 1), 1),
            ((A, E, 1), 2),
            ((B, B, 1), 1),
            ((B, C, 1), 2),
            ((B, D, 1), 3),
            ((B, E, 1), 4),
            ((C, C, 1), 3),
            ((C, D, 1), 4),
            ((C, E, 1), 4),
            ((D, D, 1), 4),
            ((D, E, 1), 5),
            ((E, E, 1), 6),
            // Jump-2
            ((A, A, 2), 2),
            ((A, B, 2), 3),
            ((A, C, 2), 4),
            ((A, D, 2), 5),
            ((B, B, 2), 3),
            ((B, C, 2), 4),
            ((B, D, 2), 6),
            ((C, C, 2), 6),
            // Jump-3
            ((A, A, 3), 4),
            ((A, B, 3), 4),
            ((A, C, 3), 6),
            ((B, B, 3), 4),
            ((B, C, 3), 6),
            // Jump-4
            ((A, A, 4), 5),
            ((A, B, 4), 5),
            ((B, B, 4), 6),
        ];
        Self {
            targets: entries.into_iter().collect(),
        }
    }

    /// Target number for a starport pair at a jump distance
    ///
    /// The pair is sorted so lookup is order-independent; absent pairs
    /// (everything involving X, and long jumps between poor ports) get
    /// the unreachable default.
    pub fn target(&self, a: StarportClass, b: StarportClass, jump: usize) -> i32 {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        self.targets
            .get(&(low, high, jump))
            .copied()
            .unwrap_or(UNREACHABLE_TARGET)
    }
}

impl Default for LaneTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build the trade-lane network over a populated subsector
pub fn build_space_lanes<D: Dice>(subsector: &mut Subsector, dice: &mut D) {
    let table = LaneTable::standard();

    // Phase 1: per world, bucket world-bearing cells by exact hop distance
    // over the physical grid (empty hexes are traversed, not collected)
    let mut neighbor_buckets: Vec<Option<[Vec<CellId>; MAX_JUMP]>> = vec![None; CELL_COUNT];
    for index in 0..CELL_COUNT {
        let id = CellId(index);
        if !subsector.cell(id).has_world() {
            continue;
        }
        let mut buckets: [Vec<CellId>; MAX_JUMP] = Default::default();
        for (cell, depth) in bfs::walk(id, MAX_JUMP, |c| {
            subsector.cell(c).neighbor_ids().collect::<Vec<_>>()
        }) {
            if subsector.cell(cell).has_world() {
                buckets[depth - 1].push(cell);
            }
        }
        neighbor_buckets[index] = Some(buckets);
    }

    // Phase 2: ascending jump distance, then ascending cell index, then
    // BFS discovery order within the bucket
    let mut established: AHashSet<(CellId, CellId)> = AHashSet::new();
    for jump in 1..=MAX_JUMP {
        for index in 0..CELL_COUNT {
            let id = CellId(index);
            let Some(buckets) = &neighbor_buckets[index] else {
                continue;
            };
            let candidates = buckets[jump - 1].clone();
            for target_id in candidates {
                let (Some(source), Some(target)) = (
                    subsector.cell(id).world.as_ref(),
                    subsector.cell(target_id).world.as_ref(),
                ) else {
                    continue;
                };
                let source_class = source.starport;
                let target_class = target.starport;

                if route_exists(subsector, &established, id, target_id) {
                    continue;
                }

                let target_number = table.target(source_class, target_class, jump);
                if dice.check_single(target_number, 0) {
                    add_lane(subsector, id, target_id);
                    established.insert(pair_key(id, target_id));
                    tracing::debug!(
                        "Space lane established: {} ({}) to {} ({}) at Jump-{}",
                        id.hex_label(),
                        source_class,
                        target_id.hex_label(),
                        target_class,
                        jump
                    );
                }
            }
        }
    }

    tracing::info!("Lane construction complete: {} lanes", established.len());
}

/// Unordered pair key: smaller cell index first
fn pair_key(a: CellId, b: CellId) -> (CellId, CellId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// True when any route, direct or indirect, already connects the pair
///
/// The direct check consults the established-pair set; the indirect check
/// is a BFS over the lane graph built so far, not the physical grid.
fn route_exists(
    subsector: &Subsector,
    established: &AHashSet<(CellId, CellId)>,
    start: CellId,
    end: CellId,
) -> bool {
    if established.contains(&pair_key(start, end)) {
        return true;
    }
    bfs::connected(start, end, |cell| {
        subsector
            .cell(cell)
            .world
            .as_ref()
            .map(|world| world.lanes.clone())
            .unwrap_or_default()
    })
}

/// Insert the edge symmetrically: both worlds reference each other
fn add_lane(subsector: &mut Subsector, a: CellId, b: CellId) {
    if let Some(world) = subsector.cell_mut(a).world.as_mut() {
        world.lanes.push(b);
    }
    if let Some(world) = subsector.cell_mut(b).world.as_mut() {
        world.lanes.push(a);
    }
}
