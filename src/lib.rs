//! # punk-league
//!
//! A turn-based combat and tournament simulation engine for a fictional
//! fighting-sports league.
//!
//! ## Design Principles
//!
//! 1. **Pure simulation core**: The crate ingests structured roster
//!    records and returns structured results plus human-readable log
//!    lines. Rendering, loading, and UI wiring are external.
//!
//! 2. **One RNG, passed explicitly**: Every random draw - d20 contests,
//!    ability sampling, injury rolls, knockback - flows through a single
//!    seeded `SimRng`, so any simulation can be reproduced.
//!
//! 3. **Stepwise first**: Leagues advance a day at a time and the
//!    continental tournament a step at a time; running a full season
//!    just loops the step path, so the two call styles cannot diverge.
//!
//! 4. **No back-references**: Teams own their fighters outright. Combat
//!    partitions allies and enemies structurally, and tournament
//!    entrants are reset deep clones of domestic rosters.
//!
//! ## Modules
//!
//! - `core`: IDs, domain enums, RNG, configuration, errors
//! - `abilities`: immutable ability definitions and the catalog registry
//! - `roster`: stub ingestion and fighter/team generation
//! - `combat`: round resolution, contests, targeting, cover, series
//! - `league`: fixtures, standings, regional tiers, stepwise seasons
//! - `mcl`: the continental tournament and coefficient history
//! - `session`: the driver-owned context tying it all together

pub mod abilities;
pub mod combat;
pub mod core;
pub mod league;
pub mod mcl;
pub mod roster;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AbilityId, CombatConfig, FatigueRules, FighterId, InjuryRules, Position, Race, Region, Role,
    RosterError, SimRng, SimRngState, Stat, TeamId,
};

pub use crate::abilities::{
    Ability, AbilityRegistry, AbilityTag, RangeType, RollType, StatusTemplate, TargetKind,
};

pub use crate::roster::{
    build_fighter, build_team, Fighter, FighterStub, Injury, InjurySeverity, RosterData,
    StatusEffect, Team, TeamStub,
};

pub use crate::combat::{
    play_series, recover_between_series, simulate_round, MatchLog, RoundResult, SeriesFormat,
    SeriesOutcome, SeriesResult, Side,
};

pub use crate::league::{
    round_robin_rounds, DayReport, LeagueState, LeagueTable, TableRow, TierState,
};

pub use crate::mcl::{
    slots_for_season, CoefficientHistory, MclSeasonResult, MclState, SeriesRecord, StepReport,
};

pub use crate::session::Session;
