//! Shared domain enums: roles, races, regions, positions, stats.
//!
//! These are closed sets in the league's world. Role and race drive
//! roster generation; region drives league grouping and continental
//! qualification; position drives adjacency during a bout.

use serde::{Deserialize, Serialize};

/// Combat role of a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    #[serde(rename = "DPS")]
    Dps,
    Support,
}

impl Role {
    /// All roles, in lineup-preference order (Tank, DPS, Support).
    pub const ALL: [Role; 3] = [Role::Tank, Role::Dps, Role::Support];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Tank => "Tank",
            Role::Dps => "DPS",
            Role::Support => "Support",
        };
        f.write_str(name)
    }
}

/// Race of a fighter. Each race shifts the role base stats by a fixed delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Canine,
    Feline,
    Ursine,
    Hyena,
    Mustelid,
}

impl Race {
    /// Stat deltas applied on top of the role template:
    /// (attack, defense, speed).
    #[must_use]
    pub const fn modifiers(self) -> (i32, i32, i32) {
        match self {
            Race::Canine => (0, 1, 0),
            Race::Feline => (0, 0, 1),
            Race::Ursine => (0, 1, -1),
            Race::Hyena => (1, 0, 0),
            Race::Mustelid => (0, -1, 1),
        }
    }
}

/// League region.
///
/// `LedPunkElite` competes directly in the continental tournament's elite
/// conference; the other four regions form the qualification pool and are
/// allocated slots by coefficient ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "LEDpunkElite")]
    LedPunkElite,
    CyberpunkUnderground,
    DieselpunkCold,
    SteampunkDesert,
    SolarpunkForest,
}

impl Region {
    /// Every region, elite first.
    pub const ALL: [Region; 5] = [
        Region::LedPunkElite,
        Region::CyberpunkUnderground,
        Region::DieselpunkCold,
        Region::SteampunkDesert,
        Region::SolarpunkForest,
    ];

    /// The four non-elite regions eligible for slot allocation.
    pub const POOL: [Region; 4] = [
        Region::CyberpunkUnderground,
        Region::DieselpunkCold,
        Region::SteampunkDesert,
        Region::SolarpunkForest,
    ];

    /// Region name as it appears in roster data and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Region::LedPunkElite => "LEDpunkElite",
            Region::CyberpunkUnderground => "CyberpunkUnderground",
            Region::DieselpunkCold => "DieselpunkCold",
            Region::SteampunkDesert => "SteampunkDesert",
            Region::SolarpunkForest => "SolarpunkForest",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lineup position during a bout. Reassigned at the start of every round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "R")]
    Right,
}

impl Position {
    /// Positions in lineup order: first fighter takes Left, then Center,
    /// then Right.
    pub const ORDER: [Position; 3] = [Position::Left, Position::Center, Position::Right];

    /// Adjacency: Left-Center and Center-Right only. The flanks are never
    /// adjacent to each other.
    #[must_use]
    pub const fn is_adjacent(self, other: Position) -> bool {
        matches!(
            (self, other),
            (Position::Center, Position::Left | Position::Right)
                | (Position::Left | Position::Right, Position::Center)
        )
    }

    /// One-letter label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Position::Left => "L",
            Position::Center => "C",
            Position::Right => "R",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A rollable stat. Buffs, debuffs, and fatigue penalties all resolve
/// against one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Attack,
    Defense,
    Speed,
}
