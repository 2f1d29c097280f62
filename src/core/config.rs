//! Simulation configuration.
//!
//! The engine never hardcodes fatigue or injury tuning inside the combat
//! loop; callers hand a `CombatConfig` to series-level code. The defaults
//! reproduce the baseline league rules.

use serde::{Deserialize, Serialize};

use super::rng::SimRng;
use crate::roster::{Injury, InjurySeverity};

/// Fatigue accrual and recovery tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatigueRules {
    /// Fatigue gained by every fighter who played a series.
    pub base_gain: i32,
    /// Extra fatigue for a fighter who was KO'd during the series.
    pub ko_extra: i32,
    /// Fatigue recovered between series by fighters who played.
    pub rest_played: i32,
    /// Fatigue recovered between series by fighters who sat out.
    pub rest_benched: i32,
}

impl Default for FatigueRules {
    fn default() -> Self {
        Self {
            base_gain: 2,
            ko_extra: 1,
            rest_played: 1,
            rest_benched: 2,
        }
    }
}

/// Injury chances rolled on a knockout, with recovery times.
///
/// Chances are cumulative thresholds over a single uniform roll: a roll
/// below `major` is a major injury, below `major + moderate` a moderate
/// one, below `major + moderate + minor` a minor one, and anything above
/// leaves the fighter unhurt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InjuryRules {
    pub major_chance: f64,
    pub moderate_chance: f64,
    pub minor_chance: f64,
    /// Series missed for a major injury.
    pub major_games: u32,
    /// Series missed for a moderate injury.
    pub moderate_games: u32,
    /// Series missed for a minor injury.
    pub minor_games: u32,
}

impl Default for InjuryRules {
    fn default() -> Self {
        Self {
            major_chance: 0.02,
            moderate_chance: 0.06,
            minor_chance: 0.12,
            major_games: 6,
            moderate_games: 3,
            minor_games: 1,
        }
    }
}

impl InjuryRules {
    /// Roll an injury for a freshly KO'd fighter.
    ///
    /// Consumes exactly one uniform draw. Returns `None` when the roll
    /// lands above every threshold.
    pub fn roll(&self, rng: &mut SimRng) -> Option<Injury> {
        let roll = rng.roll_unit();
        if roll < self.major_chance {
            Some(Injury::new(InjurySeverity::Major, self.major_games))
        } else if roll < self.major_chance + self.moderate_chance {
            Some(Injury::new(InjurySeverity::Moderate, self.moderate_games))
        } else if roll < self.major_chance + self.moderate_chance + self.minor_chance {
            Some(Injury::new(InjurySeverity::Minor, self.minor_games))
        } else {
            None
        }
    }
}

/// Combined combat tuning handed into series-level simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    pub fatigue: FatigueRules,
    pub injuries: InjuryRules,
}

impl CombatConfig {
    /// Create a config with the baseline rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fatigue rules.
    #[must_use]
    pub fn with_fatigue(mut self, fatigue: FatigueRules) -> Self {
        self.fatigue = fatigue;
        self
    }

    /// Replace the injury rules.
    #[must_use]
    pub fn with_injuries(mut self, injuries: InjuryRules) -> Self {
        self.injuries = injuries;
        self
    }
}
