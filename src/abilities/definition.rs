//! Ability definitions - static ability data.
//!
//! `Ability` holds the immutable properties of an ability: who may learn
//! it, how its contest resolves, and what it does on a hit. Abilities are
//! reference data shared by many fighters; a fighter holds `AbilityId`s,
//! never owned copies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AbilityId, Race, Region, Role, Stat};

/// How an ability's contest is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollType {
    /// No contest; the ability simply happens.
    None,
    /// d20 + attack vs d20 + defense, attacker wins strictly greater.
    AttackVsDefense,
    /// d20 + speed vs d20 + speed, attacker wins strictly greater.
    SpeedVsSpeed,
}

/// Delivery range. Projectiles can be intercepted by a covering Tank and
/// are easier to evade for notably faster defenders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeType {
    Close,
    Projectile,
}

/// What an ability targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// The attacker only.
    #[serde(rename = "self")]
    SelfOnly,
    /// One enemy: the lowest-SP live enemy (focus fire).
    Single,
    /// The two lowest-SP live enemies.
    #[serde(rename = "aoe_2")]
    Aoe2,
    /// Every live enemy.
    AoeAllEnemies,
    /// Every live ally.
    AoeAllAllies,
    /// The attacker and every live ally.
    AoeSelfAllies,
}

impl TargetKind {
    /// Does this kind resolve against the enemy side?
    #[must_use]
    pub const fn targets_enemies(self) -> bool {
        matches!(
            self,
            TargetKind::Single | TargetKind::Aoe2 | TargetKind::AoeAllEnemies
        )
    }

    /// Does this kind resolve against the attacker's own side?
    #[must_use]
    pub const fn targets_allies(self) -> bool {
        matches!(
            self,
            TargetKind::SelfOnly | TargetKind::AoeAllAllies | TargetKind::AoeSelfAllies
        )
    }
}

/// A buff or debuff an ability applies to its targets on a hit.
///
/// `amount` is signed: buffs carry positive amounts, debuffs negative.
/// `duration` counts the target's own turns; it is decremented at the
/// start of each of the target's turns and the effect expires at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusTemplate {
    pub stat: Stat,
    pub amount: i32,
    pub duration: u32,
}

/// Free-form ability tags the resolver understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityTag {
    /// On hit, the target is shoved out of position.
    Knockback,
}

/// Static ability definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Unique identifier for this ability.
    pub id: AbilityId,

    /// Ability name (for logs and display).
    pub name: String,

    /// Role that may learn this ability.
    pub role: Role,

    /// Optional race allow-list. `None` means any race.
    #[serde(default)]
    pub allowed_races: Option<Vec<Race>>,

    /// Optional region allow-list. `None` means any region.
    #[serde(default)]
    pub allowed_regions: Option<Vec<Region>>,

    /// Contest resolution.
    pub roll: RollType,

    /// Delivery range.
    pub range: RangeType,

    /// Targeting rule.
    pub target: TargetKind,

    /// SP damage dealt to each target on a successful hit.
    #[serde(default)]
    pub sp_on_hit: i32,

    /// Buff applied to targets on a hit.
    #[serde(default)]
    pub buff: Option<StatusTemplate>,

    /// Debuff applied to targets on a hit.
    #[serde(default)]
    pub debuff: Option<StatusTemplate>,

    /// Resolver tags.
    #[serde(default)]
    pub tags: SmallVec<[AbilityTag; 2]>,
}

impl Ability {
    /// Create a new ability definition with no effects.
    #[must_use]
    pub fn new(
        id: AbilityId,
        name: impl Into<String>,
        role: Role,
        roll: RollType,
        range: RangeType,
        target: TargetKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            allowed_races: None,
            allowed_regions: None,
            roll,
            range,
            target,
            sp_on_hit: 0,
            buff: None,
            debuff: None,
            tags: SmallVec::new(),
        }
    }

    /// Set SP damage on hit (builder pattern).
    #[must_use]
    pub fn with_sp_on_hit(mut self, sp: i32) -> Self {
        self.sp_on_hit = sp;
        self
    }

    /// Attach a buff (builder pattern).
    #[must_use]
    pub fn with_buff(mut self, stat: Stat, amount: i32, duration: u32) -> Self {
        self.buff = Some(StatusTemplate {
            stat,
            amount,
            duration,
        });
        self
    }

    /// Attach a debuff (builder pattern). `amount` should be negative.
    #[must_use]
    pub fn with_debuff(mut self, stat: Stat, amount: i32, duration: u32) -> Self {
        self.debuff = Some(StatusTemplate {
            stat,
            amount,
            duration,
        });
        self
    }

    /// Restrict to specific races (builder pattern).
    #[must_use]
    pub fn with_allowed_races(mut self, races: impl Into<Vec<Race>>) -> Self {
        self.allowed_races = Some(races.into());
        self
    }

    /// Restrict to specific regions (builder pattern).
    #[must_use]
    pub fn with_allowed_regions(mut self, regions: impl Into<Vec<Region>>) -> Self {
        self.allowed_regions = Some(regions.into());
        self
    }

    /// Add a resolver tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: AbilityTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Is this ability tagged with `tag`?
    #[must_use]
    pub fn has_tag(&self, tag: AbilityTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Can a fighter of this race and region learn this ability?
    ///
    /// The role must match exactly; the optional allow-lists only
    /// restrict when present.
    #[must_use]
    pub fn learnable_by(&self, role: Role, race: Race, region: Region) -> bool {
        if self.role != role {
            return false;
        }
        if let Some(races) = &self.allowed_races {
            if !races.contains(&race) {
                return false;
            }
        }
        if let Some(regions) = &self.allowed_regions {
            if !regions.contains(&region) {
                return false;
            }
        }
        true
    }
}
