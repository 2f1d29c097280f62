//! Fighter runtime state.
//!
//! A `Fighter` is owned exclusively by its `Team`. Combat mutates it in
//! place: SP, statuses, position, and the per-match flags all live here.
//! There is deliberately no back-reference to the owning team: combat
//! code receives both sides explicitly and partitions allies and enemies
//! by side, so cloning a team for tournament play is a plain deep copy
//! with no aliasing to untangle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::abilities::StatusTemplate;
use crate::core::{AbilityId, FighterId, Position, Race, Region, Role, Stat};

/// How badly a knockout hurt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjurySeverity {
    Minor,
    Moderate,
    Major,
}

impl std::fmt::Display for InjurySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InjurySeverity::Minor => "minor",
            InjurySeverity::Moderate => "moderate",
            InjurySeverity::Major => "major",
        };
        f.write_str(name)
    }
}

/// An active injury. At most one per fighter; `games_remaining` is
/// decremented once per completed series and the injury clears at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    pub severity: InjurySeverity,
    pub games_remaining: u32,
}

impl Injury {
    /// Create a new injury.
    #[must_use]
    pub const fn new(severity: InjurySeverity, games_remaining: u32) -> Self {
        Self {
            severity,
            games_remaining,
        }
    }
}

/// A live buff or debuff on a fighter.
///
/// `duration` counts the owner's turns: it is decremented at the start of
/// each of the owner's turns and the effect is pruned at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub stat: Stat,
    pub amount: i32,
    pub duration: u32,
}

impl From<StatusTemplate> for StatusEffect {
    fn from(template: StatusTemplate) -> Self {
        Self {
            stat: template.stat,
            amount: template.amount,
            duration: template.duration,
        }
    }
}

/// A fully-statted fighter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub race: Race,
    pub role: Role,
    pub region: Region,

    /// Base stats after role template + race modifiers, each at least 1.
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,

    pub max_sp: i32,
    pub current_sp: i32,

    /// Fatigue capacity baseline; the penalty scales against this.
    pub stamina: i32,
    /// Accumulated exertion, never negative.
    pub fatigue: i32,

    pub injury: Option<Injury>,

    /// Learned abilities in fixed order: 3 chosen plus the basic strike
    /// appended last.
    pub abilities: SmallVec<[AbilityId; 4]>,

    pub buffs: Vec<StatusEffect>,
    pub debuffs: Vec<StatusEffect>,

    /// Lineup position, reassigned at the start of every round.
    pub position: Position,

    pub played_this_match: bool,
    pub was_kod_this_match: bool,
    pub cover_used_this_round: bool,
}

impl Fighter {
    /// Is this fighter still standing in the current round?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_sp > 0
    }

    /// Fit to be fielded? Injured fighters sit out until recovered.
    #[must_use]
    pub fn is_available(&self) -> bool {
        match self.injury {
            Some(injury) => injury.games_remaining == 0,
            None => true,
        }
    }

    /// Effective stat: base, plus active buffs and debuffs (additive),
    /// minus the fatigue penalty, floored at 1.
    #[must_use]
    pub fn effective_stat(&self, stat: Stat) -> i32 {
        let base = match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
        };

        let mut value = base;
        for effect in self.buffs.iter().chain(self.debuffs.iter()) {
            if effect.stat == stat {
                value += effect.amount;
            }
        }

        value -= self.fatigue_penalty();
        value.max(1)
    }

    /// Fatigue penalty: `floor(fatigue / stamina * 2)`.
    #[must_use]
    pub fn fatigue_penalty(&self) -> i32 {
        if self.stamina > 0 {
            self.fatigue * 2 / self.stamina
        } else {
            self.fatigue * 2
        }
    }

    /// Deal SP damage, flooring at 0.
    ///
    /// Returns `true` exactly when this hit knocked the fighter out
    /// (a strict `>0` to `0` transition), and records the KO flag. The
    /// injury roll that accompanies a KO is the caller's job, since it
    /// needs the RNG and the injury table.
    pub fn apply_sp_damage(&mut self, amount: i32) -> bool {
        let before = self.current_sp;
        self.current_sp = (self.current_sp - amount.max(0)).max(0);

        if before > 0 && self.current_sp == 0 {
            self.was_kod_this_match = true;
            true
        } else {
            false
        }
    }

    /// Tick this fighter's own status durations at the start of its turn:
    /// decrement each, prune expired.
    pub fn tick_statuses(&mut self) {
        let tick = |effects: &mut Vec<StatusEffect>| {
            effects.retain_mut(|e| {
                e.duration = e.duration.saturating_sub(1);
                e.duration > 0
            });
        };
        tick(&mut self.buffs);
        tick(&mut self.debuffs);
    }

    /// Apply a buff or debuff from an ability hit.
    pub fn push_status(&mut self, template: StatusTemplate, is_buff: bool) {
        let effect = StatusEffect::from(template);
        if is_buff {
            self.buffs.push(effect);
        } else {
            self.debuffs.push(effect);
        }
    }

    /// Round reset: full SP, cover available, statuses cleared.
    pub fn reset_for_round(&mut self) {
        self.current_sp = self.max_sp;
        self.cover_used_this_round = false;
        self.buffs.clear();
        self.debuffs.clear();
    }

    /// Tournament reset: fresh fatigue, no injury, full SP, no statuses,
    /// flags cleared. Applied to cloned entrants so domestic wear never
    /// leaks into continental play.
    pub fn reset_for_tournament(&mut self) {
        self.fatigue = 0;
        self.injury = None;
        self.current_sp = self.max_sp;
        self.played_this_match = false;
        self.was_kod_this_match = false;
        self.cover_used_this_round = false;
        self.buffs.clear();
        self.debuffs.clear();
    }
}
