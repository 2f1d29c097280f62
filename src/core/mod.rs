//! Core types: identifiers, domain enums, RNG, configuration, errors.
//!
//! Everything here is shared by the roster, combat, league, and
//! tournament layers and carries no simulation logic of its own.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod types;

pub use config::{CombatConfig, FatigueRules, InjuryRules};
pub use error::RosterError;
pub use ids::{AbilityId, FighterId, TeamId};
pub use rng::{SimRng, SimRngState};
pub use types::{Position, Race, Region, Role, Stat};
