//! Round resolution.
//!
//! One round is a skirmish between two lineups, resolved turn by turn in
//! initiative order until one side has nobody left standing. The round
//! mutates the fighters it is handed (SP, statuses, positions, injury
//! and KO flags) and appends its narration to the caller's log.
//!
//! Enemy/ally partitioning is structural: the two sides arrive as
//! separate slices and every action names fighters as `(Side, index)`.
//! Fighters never hold a pointer back to their team.

use tracing::debug;

use super::contest::{resolve_contest, AttackerProfile};
use super::log::MatchLog;
use super::policy::{choose_ability, DEFAULT_POLICY};
use super::targeting::{find_covering_tank, select_targets};
use crate::abilities::{Ability, AbilityRegistry, AbilityTag, RangeType};
use crate::core::{CombatConfig, FighterId, Position, SimRng, Stat};
use crate::roster::Fighter;

/// Which lineup a fighter belongs to for the duration of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Label for logs ("A"/"B").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

/// Outcome of one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: Side,
}

#[derive(Clone, Copy, Debug)]
struct TurnEntry {
    side: Side,
    idx: usize,
    initiative: i32,
    id: FighterId,
}

fn has_live(side: &[&mut Fighter]) -> bool {
    side.iter().any(|f| f.is_alive())
}

fn fighter_mut<'r>(
    side_a: &'r mut [&mut Fighter],
    side_b: &'r mut [&mut Fighter],
    side: Side,
    idx: usize,
) -> &'r mut Fighter {
    match side {
        Side::A => &mut *side_a[idx],
        Side::B => &mut *side_b[idx],
    }
}

/// Simulate one round between two lineups.
///
/// Lineups hold one to three fighters; series play always fields three
/// when the rosters allow it. Every fighter is reset to full SP, cover
/// and statuses cleared, and positions assigned L/C/R in lineup order
/// before the first turn.
pub fn simulate_round<'a>(
    side_a: &mut [&'a mut Fighter],
    side_b: &mut [&'a mut Fighter],
    registry: &AbilityRegistry,
    config: &CombatConfig,
    rng: &mut SimRng,
    log: &mut MatchLog,
) -> RoundResult {
    assert!(
        (1..=3).contains(&side_a.len()) && (1..=3).contains(&side_b.len()),
        "a lineup holds between one and three fighters"
    );

    for (i, fighter) in side_a.iter_mut().enumerate() {
        fighter.reset_for_round();
        fighter.position = Position::ORDER[i];
    }
    for (i, fighter) in side_b.iter_mut().enumerate() {
        fighter.reset_for_round();
        fighter.position = Position::ORDER[i];
    }

    // Initiative: d20 + effective speed, highest first. Ties break by
    // fighter id ascending so the order never depends on sort internals.
    let mut order: Vec<TurnEntry> = Vec::with_capacity(side_a.len() + side_b.len());
    for (side, lineup) in [(Side::A, &*side_a), (Side::B, &*side_b)] {
        for (idx, fighter) in lineup.iter().enumerate() {
            if !fighter.is_alive() {
                continue;
            }
            order.push(TurnEntry {
                side,
                idx,
                initiative: rng.d20() + fighter.effective_stat(Stat::Speed),
                id: fighter.id,
            });
        }
    }
    order.sort_by(|x, y| y.initiative.cmp(&x.initiative).then(x.id.cmp(&y.id)));

    log.push("=== New Round Begins ===");
    let names: Vec<&str> = order
        .iter()
        .map(|e| match e.side {
            Side::A => side_a[e.idx].name.as_str(),
            Side::B => side_b[e.idx].name.as_str(),
        })
        .collect();
    log.push(format!("Turn order: {}", names.join(", ")));
    debug!(lineup_a = side_a.len(), lineup_b = side_b.len(), "round start");

    while has_live(side_a) && has_live(side_b) {
        for entry in &order {
            {
                let attacker = &*fighter_mut(side_a, side_b, entry.side, entry.idx);
                if !attacker.is_alive() {
                    continue;
                }
            }

            let enemies_alive = match entry.side {
                Side::A => has_live(side_b),
                Side::B => has_live(side_a),
            };
            if !enemies_alive {
                break;
            }

            let (chosen, attacker_name, attacker_role) = {
                let attacker = fighter_mut(side_a, side_b, entry.side, entry.idx);
                attacker.tick_statuses();
                let chosen = choose_ability(attacker, registry, &DEFAULT_POLICY);
                (chosen, attacker.name.clone(), attacker.role)
            };

            let Some(ability_id) = chosen else {
                log.push(format!("{attacker_name} has no usable action."));
                continue;
            };
            let ability = registry.get_unchecked(ability_id);

            log.push(format!(
                "{attacker_name}'s turn. ({attacker_role}) uses {}.",
                ability.name
            ));

            perform_action(
                entry.side, entry.idx, ability, side_a, side_b, config, rng, log,
            );

            if !has_live(side_a) || !has_live(side_b) {
                break;
            }
        }
    }

    let winner = if has_live(side_a) { Side::A } else { Side::B };
    log.push(format!("=== Round ends. Winner: Team {} ===", winner.label()));
    debug!(winner = winner.label(), "round complete");

    RoundResult { winner }
}

/// Resolve one fighter's action against its targets.
#[allow(clippy::too_many_arguments)]
fn perform_action<'a>(
    attacker_side: Side,
    attacker_idx: usize,
    ability: &Ability,
    side_a: &mut [&'a mut Fighter],
    side_b: &mut [&'a mut Fighter],
    config: &CombatConfig,
    rng: &mut SimRng,
    log: &mut MatchLog,
) {
    let targets = select_targets(ability.target, attacker_side, attacker_idx, side_a, side_b);

    let (profile, attacker_name) = {
        let attacker = &*fighter_mut(side_a, side_b, attacker_side, attacker_idx);
        (AttackerProfile::of(attacker), attacker.name.clone())
    };

    if targets.is_empty() {
        log.push(format!(
            "{attacker_name} has no valid targets for {}.",
            ability.name
        ));
        return;
    }

    for (target_side, original_idx) in targets {
        let mut target_idx = original_idx;

        // Cover: projectiles aimed at an enemy can be taken by an
        // adjacent Tank that has not covered yet this round.
        if ability.range == RangeType::Projectile && target_side != attacker_side {
            let interception = {
                let defending: &[&mut Fighter] = match target_side {
                    Side::A => side_a,
                    Side::B => side_b,
                };
                find_covering_tank(defending, target_idx).map(|tank_idx| {
                    (
                        tank_idx,
                        defending[tank_idx].name.clone(),
                        defending[target_idx].name.clone(),
                    )
                })
            };

            if let Some((tank_idx, tank_name, protected)) = interception {
                fighter_mut(side_a, side_b, target_side, tank_idx).cover_used_this_round = true;
                log.push(format!(
                    "{tank_name} intercepts the attack to protect {protected}!"
                ));
                target_idx = tank_idx;
            }
        }

        let hit = {
            let defender = &*fighter_mut(side_a, side_b, target_side, target_idx);
            resolve_contest(&profile, defender, ability, rng)
        };

        let defender_name = fighter_mut(side_a, side_b, target_side, target_idx)
            .name
            .clone();

        if !hit {
            log.push(format!(
                "{attacker_name} uses {} on {defender_name} - MISSED.",
                ability.name
            ));
            continue;
        }

        log.push(format!(
            "{attacker_name} uses {} on {defender_name} - HIT.",
            ability.name
        ));

        {
            let defender = fighter_mut(side_a, side_b, target_side, target_idx);
            let before = defender.current_sp;
            let koed = if ability.sp_on_hit > 0 {
                defender.apply_sp_damage(ability.sp_on_hit)
            } else {
                false
            };

            let lost = before - defender.current_sp;
            if lost > 0 {
                log.push(format!(
                    "  {defender_name} loses {lost} SP (now {}/{}).",
                    defender.current_sp, defender.max_sp
                ));
            }

            if koed {
                // One injury roll per KO event, and never while an
                // earlier injury is still healing.
                let still_injured = defender
                    .injury
                    .is_some_and(|injury| injury.games_remaining > 0);
                if !still_injured {
                    if let Some(injury) = config.injuries.roll(rng) {
                        defender.injury = Some(injury);
                    }
                }

                log.push(format!("  {defender_name} is KO'd!"));
                if let Some(injury) = defender.injury {
                    if injury.games_remaining > 0 {
                        log.push(format!(
                            "  {defender_name} suffered a {} injury (out for {} game(s)).",
                            injury.severity, injury.games_remaining
                        ));
                    }
                }
            }

            if let Some(buff) = ability.buff {
                defender.push_status(buff, true);
            }
            if let Some(debuff) = ability.debuff {
                defender.push_status(debuff, false);
            }
        }

        if ability.has_tag(AbilityTag::Knockback) && target_side != attacker_side {
            apply_knockback(side_a, side_b, target_side, target_idx, rng, log);
        }
    }
}

/// Shove a struck fighter out of position.
///
/// A center target swaps places with a random flank teammate when one
/// exists; a flank target is pushed into the center. Teammate positions
/// include downed fighters, and the displaced-center case leaves the old
/// occupant where it stands.
fn apply_knockback<'a>(
    side_a: &mut [&'a mut Fighter],
    side_b: &mut [&'a mut Fighter],
    target_side: Side,
    target_idx: usize,
    rng: &mut SimRng,
    log: &mut MatchLog,
) {
    let side: &mut [&'a mut Fighter] = match target_side {
        Side::A => side_a,
        Side::B => side_b,
    };

    if side[target_idx].position == Position::Center {
        let flanks: Vec<usize> = side
            .iter()
            .enumerate()
            .filter(|(i, f)| {
                *i != target_idx && matches!(f.position, Position::Left | Position::Right)
            })
            .map(|(i, _)| i)
            .collect();

        if let Some(&swap_idx) = rng.choose(&flanks) {
            let flank_pos = side[swap_idx].position;
            side[swap_idx].position = Position::Center;
            side[target_idx].position = flank_pos;
        }
    } else {
        side[target_idx].position = Position::Center;
    }

    log.push(format!(
        "  {} is knocked into a new position ({}).",
        side[target_idx].name, side[target_idx].position
    ));
}
