//! Ability selection policy.
//!
//! Each fighter picks its action from an ordered rule table rather than
//! a branching chain, so the priority order is data: visible in one
//! place, testable rule by rule, and extensible without touching the
//! resolver.

use crate::abilities::{AbilityRegistry, TargetKind};
use crate::core::AbilityId;
use crate::roster::Fighter;

/// One rule in the selection policy. Rules are tried in order; the first
/// rule that matches an ability wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionRule {
    /// A single-target ability that deals damage - press the advantage.
    Finisher,
    /// Any area ability (two targets or the whole enemy side).
    AnyAoe,
    /// A self or ally buff, but only when the fighter is nearly down.
    BuffWhenLow,
    /// The first learned ability. Always matches: the synthesized basic
    /// strike guarantees a non-empty list.
    Fallback,
}

/// The baseline policy: finish low targets, otherwise spread damage,
/// shore up when nearly down, and fall back to the first ability.
pub const DEFAULT_POLICY: [ActionRule; 4] = [
    ActionRule::Finisher,
    ActionRule::AnyAoe,
    ActionRule::BuffWhenLow,
    ActionRule::Fallback,
];

impl ActionRule {
    /// The ability this rule selects for `fighter`, if any.
    #[must_use]
    pub fn select(self, fighter: &Fighter, registry: &AbilityRegistry) -> Option<AbilityId> {
        let mut known = fighter
            .abilities
            .iter()
            .filter_map(|id| registry.get(*id));

        match self {
            ActionRule::Finisher => known
                .find(|a| a.sp_on_hit >= 1 && a.target == TargetKind::Single)
                .map(|a| a.id),
            ActionRule::AnyAoe => known
                .find(|a| matches!(a.target, TargetKind::Aoe2 | TargetKind::AoeAllEnemies))
                .map(|a| a.id),
            ActionRule::BuffWhenLow => {
                if fighter.current_sp > 1 {
                    return None;
                }
                known
                    .find(|a| {
                        matches!(a.target, TargetKind::SelfOnly | TargetKind::AoeSelfAllies)
                    })
                    .map(|a| a.id)
            }
            ActionRule::Fallback => fighter.abilities.first().copied(),
        }
    }
}

/// Choose the ability a fighter uses this turn, walking the policy in
/// order.
#[must_use]
pub fn choose_ability(
    fighter: &Fighter,
    registry: &AbilityRegistry,
    policy: &[ActionRule],
) -> Option<AbilityId> {
    policy
        .iter()
        .find_map(|rule| rule.select(fighter, registry))
}
