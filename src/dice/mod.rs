//! Dice service - the injected randomness source
//!
//! All generation randomness flows through the [`Dice`] trait: a single
//! six-sided roll, the Traveller "standard roll" (2d6 + modifier), and
//! threshold checks against both. Seeded generation uses [`SeededDice`];
//! tests force outcomes with [`FixedDice`] or [`ScriptedDice`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness contract consumed by world and lane generation
pub trait Dice {
    /// Uniform roll over 1..=6
    fn roll_d6(&mut self) -> i32;

    /// Sum of two d6 rolls plus a modifier
    fn standard_roll(&mut self, modifier: i32) -> i32 {
        self.roll_d6() + self.roll_d6() + modifier
    }

    /// True when 2d6 + modifier meets the target number
    fn check_standard(&mut self, target: i32, modifier: i32) -> bool {
        self.standard_roll(modifier) >= target
    }

    /// True when 1d6 + modifier meets the target number
    fn check_single(&mut self, target: i32, modifier: i32) -> bool {
        self.roll_d6() + modifier >= target
    }
}

/// ChaCha8-backed dice; the same seed always yields the same subsector
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn roll_d6(&mut self) -> i32 {
        self.rng.gen_range(1..=6)
    }
}

/// Dice that always land on the same face
///
/// `FixedDice::new(6)` forces every threshold check with a target <= 6 to
/// succeed, `FixedDice::new(1)` forces most to fail.
#[derive(Debug, Clone)]
pub struct FixedDice {
    face: i32,
}

impl FixedDice {
    pub fn new(face: i32) -> Self {
        debug_assert!((1..=6).contains(&face));
        Self { face }
    }
}

impl Dice for FixedDice {
    fn roll_d6(&mut self) -> i32 {
        self.face
    }
}

/// Dice that replay a fixed sequence of faces, for scripting exact outcomes
///
/// Panics when the script runs out; intended for tests only.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<i32>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<i32>) -> Self {
        Self { rolls, next: 0 }
    }

    /// Number of rolls consumed so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll_d6(&mut self) -> i32 {
        let face = self.rolls[self.next];
        self.next += 1;
        face
    }
}
