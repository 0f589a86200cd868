//! World profiles: starports, planetary properties, trade classifications
//!
//! Property label tables are a closed set by convention, not constraint:
//! a key outside its table degrades to an "Unknown" label so out-of-range
//! seeding never aborts generation.

use serde::{Deserialize, Serialize};

use crate::core::types::CellId;

/// Starport quality, A (best) through E, or X for none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StarportClass {
    A,
    B,
    C,
    D,
    E,
    X,
}

impl StarportClass {
    /// Map a 2d6 starport roll onto its class band
    pub fn from_standard_roll(roll: i32) -> Self {
        match roll {
            2..=4 => Self::A,
            5..=6 => Self::B,
            7..=8 => Self::C,
            9 => Self::D,
            10..=11 => Self::E,
            _ => Self::X,
        }
    }

    /// 2d6 target for a naval base, if this class can host one
    pub fn naval_base_target(&self) -> Option<i32> {
        match self {
            Self::A | Self::B => Some(8),
            _ => None,
        }
    }

    /// 2d6 target for a scout base, if this class can host one
    pub fn scout_base_target(&self) -> Option<i32> {
        match self {
            Self::A => Some(10),
            Self::B => Some(9),
            Self::C => Some(8),
            Self::D => Some(7),
            Self::E | Self::X => None,
        }
    }

    /// Contribution to the tech-level roll modifier
    pub fn tech_modifier(&self) -> i32 {
        match self {
            Self::A => 6,
            Self::B => 4,
            Self::C => 2,
            Self::D | Self::E => 0,
            Self::X => -4,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::X => 'X',
        }
    }
}

impl std::fmt::Display for StarportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One planetary attribute: integer key plus descriptive label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetProperty {
    pub key: i32,
    pub label: String,
}

impl PlanetProperty {
    fn from_table(key: i32, table: &[(i32, &str)]) -> Self {
        let label = table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        Self { key, label }
    }

    pub fn size(key: i32) -> Self {
        Self::from_table(key, SIZE_LABELS)
    }

    pub fn atmosphere(key: i32) -> Self {
        Self::from_table(key, ATMOSPHERE_LABELS)
    }

    pub fn hydrographics(key: i32) -> Self {
        Self::from_table(key, HYDROGRAPHICS_LABELS)
    }

    pub fn population(key: i32) -> Self {
        Self::from_table(key, POPULATION_LABELS)
    }

    pub fn government(key: i32) -> Self {
        Self::from_table(key, GOVERNMENT_LABELS)
    }

    pub fn law_level(key: i32) -> Self {
        Self::from_table(key, LAW_LEVEL_LABELS)
    }
}

const SIZE_LABELS: &[(i32, &str)] = &[
    (0, "Asteroid/Planetoid Complex"),
    (1, "1000 miles diameter"),
    (2, "2000 miles diameter"),
    (3, "3000 miles diameter"),
    (4, "4000 miles diameter"),
    (5, "5000 miles diameter"),
    (6, "6000 miles diameter"),
    (7, "7000 miles diameter"),
    (8, "8000 miles diameter"),
    (9, "9000 miles diameter"),
    (10, "10000 miles diameter"),
    (11, "11000 miles diameter"),
    (12, "12000 miles diameter"),
];

const ATMOSPHERE_LABELS: &[(i32, &str)] = &[
    (0, "No Atmosphere"),
    (1, "Trace"),
    (2, "Very Thin, Tainted"),
    (3, "Very Thin"),
    (4, "Thin, Tainted"),
    (5, "Thin"),
    (6, "Standard"),
    (7, "Standard, Tainted"),
    (8, "Dense"),
    (9, "Dense, Tainted"),
    (10, "Exotic"),
    (11, "Corrosive"),
    (12, "Insidious"),
];

const HYDROGRAPHICS_LABELS: &[(i32, &str)] = &[
    (0, "No free standing water"),
    (1, "10%"),
    (2, "20%"),
    (3, "30%"),
    (4, "40%"),
    (5, "50%"),
    (6, "60%"),
    (7, "70%"),
    (8, "80%"),
    (9, "90%"),
    (10, "All water. No land masses"),
];

const POPULATION_LABELS: &[(i32, &str)] = &[
    (0, "No inhabitants"),
    (1, "Tens"),
    (2, "Hundreds"),
    (3, "Thousands"),
    (4, "Tens of thousands"),
    (5, "Hundreds of thousands"),
    (6, "Millions"),
    (7, "Tens of millions"),
    (8, "Hundreds of millions"),
    (9, "Billions"),
    (10, "Tens of billions"),
];

const GOVERNMENT_LABELS: &[(i32, &str)] = &[
    (0, "No government structure; family bonds predominate"),
    (1, "Company/Corporation; a managerial elite rules its employees"),
    (2, "Participating Democracy; citizens decide directly"),
    (3, "Self-Perpetuating Oligarchy; a restricted minority rules"),
    (4, "Representative Democracy; elected representatives rule"),
    (5, "Feudal Technocracy; rule by mutually beneficial technical relationships"),
    (6, "Captive Government; leadership imposed by an outside group"),
    (7, "Balkanization; no central authority exists"),
    (8, "Civil Service Bureaucracy; rule by individuals selected for expertise"),
    (9, "Impersonal Bureaucracy; agencies insulated from the governed"),
    (10, "Charismatic Dictatorship; a single leader with overwhelming confidence"),
    (11, "Non-Charismatic Dictatorship; a successor leader through normal channels"),
    (12, "Charismatic Oligarchy; a trusted select group rules"),
    (13, "Religious Dictatorship; rule by a religious organization"),
];

const LAW_LEVEL_LABELS: &[(i32, &str)] = &[
    (0, "No weapon laws"),
    (1, "Body pistols, explosives and poison gas prohibited"),
    (2, "Portable energy weapons prohibited"),
    (3, "Military weapons (machine guns, automatic rifles) prohibited"),
    (4, "Light assault weapons (submachine guns) prohibited"),
    (5, "Personal concealable firearms prohibited"),
    (6, "Most firearms prohibited; open carry discouraged"),
    (7, "Shotguns prohibited"),
    (8, "Long bladed weapons controlled; open possession prohibited"),
    (9, "Possession of any weapon outside the home prohibited"),
];

/// A generated star system's full profile
///
/// `lanes` holds cell indices of directly connected trade partners; the
/// partner world carries the mirror entry, forming an undirected edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub starport: StarportClass,
    pub has_naval_base: bool,
    pub has_scout_base: bool,
    pub size: PlanetProperty,
    pub atmosphere: PlanetProperty,
    pub hydrographics: PlanetProperty,
    pub population: PlanetProperty,
    pub government: PlanetProperty,
    pub law_level: PlanetProperty,
    pub tech_level: i32,
    pub drugs_legal: bool,
    pub has_psionic_institute: bool,
    pub lanes: Vec<CellId>,
}

impl World {
    pub fn is_agricultural(&self) -> bool {
        (4..=9).contains(&self.atmosphere.key)
            && (4..=8).contains(&self.hydrographics.key)
            && (5..=7).contains(&self.population.key)
    }

    pub fn is_non_agricultural(&self) -> bool {
        self.atmosphere.key <= 3 && self.hydrographics.key <= 3 && self.population.key >= 6
    }

    pub fn is_industrial(&self) -> bool {
        [0, 1, 2, 4, 7, 9].contains(&self.atmosphere.key) && self.population.key >= 9
    }

    pub fn is_non_industrial(&self) -> bool {
        self.population.key < 6
    }

    pub fn is_rich(&self) -> bool {
        (4..=9).contains(&self.government.key)
            && [6, 8].contains(&self.atmosphere.key)
            && (6..=8).contains(&self.population.key)
    }

    pub fn is_poor(&self) -> bool {
        (2..=5).contains(&self.atmosphere.key) && self.hydrographics.key <= 3
    }

    /// Two-letter trade classification codes, in conventional order
    pub fn trade_codes(&self) -> Vec<&'static str> {
        let mut codes = Vec::new();
        if self.is_agricultural() {
            codes.push("Ag");
        }
        if self.is_non_agricultural() {
            codes.push("Na");
        }
        if self.is_industrial() {
            codes.push("In");
        }
        if self.is_non_industrial() {
            codes.push("Ni");
        }
        if self.is_rich() {
            codes.push("Ri");
        }
        if self.is_poor() {
            codes.push("Po");
        }
        codes
    }

    /// Universal World Profile code, e.g. "A867949-C"
    pub fn uwp_code(&self) -> String {
        format!(
            "{}{}{}{}{}{}{}-{}",
            self.starport,
            uwp_digit(self.size.key),
            uwp_digit(self.atmosphere.key),
            uwp_digit(self.hydrographics.key),
            uwp_digit(self.population.key),
            uwp_digit(self.government.key),
            uwp_digit(self.law_level.key),
            uwp_digit(self.tech_level),
        )
    }
}

/// Extended-hex digit used in UWP codes (10 = A, 11 = B, ...)
fn uwp_digit(key: i32) -> char {
    match key {
        0..=9 => (b'0' + key as u8) as char,
        10..=33 => (b'A' + (key - 10) as u8) as char,
        _ => '?',
    }
}
