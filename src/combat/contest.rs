//! Contested rolls.
//!
//! An attack resolves as opposed d20 rolls plus the relevant effective
//! stats; the attacker needs a strictly greater total. Projectiles are
//! easier to evade for a defender who is clearly faster on paper: the
//! speed gate compares raw speed stats, not buffed ones.

use crate::abilities::{Ability, RangeType, RollType};
use crate::core::{SimRng, Stat};
use crate::roster::Fighter;

/// Defense bonus against projectiles for a clearly faster defender.
const PROJECTILE_EVASION_BONUS: i32 = 2;
/// Raw speed margin required for the evasion bonus.
const PROJECTILE_EVASION_MARGIN: i32 = 3;

/// The attacker's numbers, snapshotted before targets are iterated so a
/// mutable borrow of the defender never overlaps the attacker.
#[derive(Clone, Copy, Debug)]
pub struct AttackerProfile {
    /// Effective attack at the moment of the swing.
    pub attack: i32,
    /// Effective speed for speed contests.
    pub speed: i32,
    /// Raw (unmodified) speed for the projectile gate.
    pub raw_speed: i32,
}

impl AttackerProfile {
    /// Snapshot a fighter's contest-relevant numbers.
    #[must_use]
    pub fn of(fighter: &Fighter) -> Self {
        Self {
            attack: fighter.effective_stat(Stat::Attack),
            speed: fighter.effective_stat(Stat::Speed),
            raw_speed: fighter.speed,
        }
    }
}

/// Resolve the contest for one target. Returns `true` on a hit.
///
/// Rolls the attacker's die first, then the defender's, so the draw
/// order is stable for a given seed.
pub fn resolve_contest(
    attacker: &AttackerProfile,
    defender: &Fighter,
    ability: &Ability,
    rng: &mut SimRng,
) -> bool {
    match ability.roll {
        RollType::None => true,
        RollType::AttackVsDefense => {
            let attack_total = rng.d20() + attacker.attack;
            let mut defense_total = rng.d20() + defender.effective_stat(Stat::Defense);

            if ability.range == RangeType::Projectile
                && defender.speed >= attacker.raw_speed + PROJECTILE_EVASION_MARGIN
            {
                defense_total += PROJECTILE_EVASION_BONUS;
            }

            attack_total > defense_total
        }
        RollType::SpeedVsSpeed => {
            let attack_total = rng.d20() + attacker.speed;
            let defense_total = rng.d20() + defender.effective_stat(Stat::Speed);
            attack_total > defense_total
        }
    }
}
