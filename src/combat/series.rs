//! Best-of-N series.
//!
//! A series wraps the round primitive into a match between two teams:
//! best-of-3 for knockout play (no draws), best-of-2 for league play
//! (1-1 is a draw). Fatigue gain and injury progression land exactly
//! once per series, against the full roster of both teams; recovery
//! between series is a separate call the scheduler makes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::log::MatchLog;
use super::round::{simulate_round, Side};
use crate::abilities::AbilityRegistry;
use crate::core::{CombatConfig, FatigueRules, SimRng, TeamId};
use crate::roster::{Fighter, Team};

/// Series format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesFormat {
    /// First to two round wins; at most three rounds; no draws.
    BestOfThree,
    /// Exactly two rounds; one round each is a draw.
    BestOfTwo,
}

/// Outcome of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesOutcome {
    TeamA,
    TeamB,
    Draw,
}

impl SeriesOutcome {
    /// The winning team's ID, if the series was decided.
    #[must_use]
    pub fn winner(self, team_a: TeamId, team_b: TeamId) -> Option<TeamId> {
        match self {
            SeriesOutcome::TeamA => Some(team_a),
            SeriesOutcome::TeamB => Some(team_b),
            SeriesOutcome::Draw => None,
        }
    }
}

/// A completed series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub outcome: SeriesOutcome,
    pub wins_a: u32,
    pub wins_b: u32,
    pub log: MatchLog,
}

/// Play a full series between two teams.
///
/// Lineups are picked fresh from each roster (injured fighters sit out).
/// A team with nobody fit to field forfeits: the opponent wins by
/// walkover, logged as a notice rather than raised as an error.
pub fn play_series(
    team_a: &mut Team,
    team_b: &mut Team,
    format: SeriesFormat,
    registry: &AbilityRegistry,
    config: &CombatConfig,
    rng: &mut SimRng,
) -> SeriesResult {
    let mut log = MatchLog::new();

    let picks_a = team_a.pick_lineup();
    let picks_b = team_b.pick_lineup();

    let result = if picks_a.is_empty() || picks_b.is_empty() {
        let outcome = match (picks_a.is_empty(), picks_b.is_empty()) {
            (true, true) => {
                log.push(format!(
                    "Neither {} nor {} can field a lineup. Match abandoned.",
                    team_a.name, team_b.name
                ));
                SeriesOutcome::Draw
            }
            (true, false) => {
                log.push(format!(
                    "{} cannot field a lineup. {} win by walkover.",
                    team_a.name, team_b.name
                ));
                SeriesOutcome::TeamB
            }
            (false, true) => {
                log.push(format!(
                    "{} cannot field a lineup. {} win by walkover.",
                    team_b.name, team_a.name
                ));
                SeriesOutcome::TeamA
            }
            (false, false) => unreachable!(),
        };

        SeriesResult {
            outcome,
            wins_a: 0,
            wins_b: 0,
            log,
        }
    } else {
        team_a.mark_played(&picks_a);
        team_b.mark_played(&picks_b);

        let mut lineup_a = lineup_refs(team_a, &picks_a);
        let mut lineup_b = lineup_refs(team_b, &picks_b);

        let (mut wins_a, mut wins_b) = (0u32, 0u32);
        let mut round_number = 1u32;

        loop {
            let done = match format {
                SeriesFormat::BestOfThree => wins_a >= 2 || wins_b >= 2,
                SeriesFormat::BestOfTwo => round_number > 2,
            };
            if done {
                break;
            }

            log.push(format!("##### ROUND {round_number} #####"));
            let result = simulate_round(&mut lineup_a, &mut lineup_b, registry, config, rng, &mut log);

            match result.winner {
                Side::A => wins_a += 1,
                Side::B => wins_b += 1,
            }
            log.push(format!(
                "Team {} wins round {round_number} (total: {wins_a}-{wins_b}).",
                result.winner.label()
            ));
            round_number += 1;
        }

        let outcome = if wins_a > wins_b {
            SeriesOutcome::TeamA
        } else if wins_b > wins_a {
            SeriesOutcome::TeamB
        } else {
            SeriesOutcome::Draw
        };

        match outcome {
            SeriesOutcome::TeamA => log.push(format!(
                "===== MATCH OVER: {} win {wins_a}-{wins_b} =====",
                team_a.name
            )),
            SeriesOutcome::TeamB => log.push(format!(
                "===== MATCH OVER: {} win {wins_a}-{wins_b} =====",
                team_b.name
            )),
            SeriesOutcome::Draw => {
                log.push(format!("===== MATCH OVER: {wins_a}-{wins_b} (DRAW) ====="));
            }
        }

        SeriesResult {
            outcome,
            wins_a,
            wins_b,
            log,
        }
    };

    // Series aftermath, exactly once, across the full rosters: the
    // bench progresses injuries too.
    apply_series_fatigue(team_a, &config.fatigue);
    apply_series_fatigue(team_b, &config.fatigue);
    progress_injuries(team_a);
    progress_injuries(team_b);

    debug!(
        team_a = %team_a.name,
        team_b = %team_b.name,
        outcome = ?result.outcome,
        "series complete"
    );

    result
}

/// Collect mutable lineup references in pick order.
fn lineup_refs<'t>(team: &'t mut Team, picks: &[usize]) -> Vec<&'t mut Fighter> {
    let mut picked: Vec<(usize, &'t mut Fighter)> = team
        .fighters
        .iter_mut()
        .enumerate()
        .filter(|(i, _)| picks.contains(i))
        .collect();
    picked.sort_by_key(|(i, _)| picks.iter().position(|p| p == i).unwrap_or(usize::MAX));
    picked.into_iter().map(|(_, f)| f).collect()
}

/// Fatigue gain for everyone who played this series, with the KO extra.
pub fn apply_series_fatigue(team: &mut Team, rules: &FatigueRules) {
    for fighter in &mut team.fighters {
        if !fighter.played_this_match {
            continue;
        }
        let mut gain = rules.base_gain;
        if fighter.was_kod_this_match {
            gain += rules.ko_extra;
        }
        fighter.fatigue = (fighter.fatigue + gain).max(0);
    }
}

/// Advance injuries by one game; fully healed fighters are cleared.
pub fn progress_injuries(team: &mut Team) {
    for fighter in &mut team.fighters {
        if let Some(injury) = &mut fighter.injury {
            injury.games_remaining = injury.games_remaining.saturating_sub(1);
            if injury.games_remaining == 0 {
                fighter.injury = None;
            }
        }
    }
}

/// Rest between series: played fighters recover a little, benched
/// fighters more, and the per-match flags reset.
pub fn recover_between_series(team: &mut Team, rules: &FatigueRules) {
    for fighter in &mut team.fighters {
        let rest = if fighter.played_this_match {
            rules.rest_played
        } else {
            rules.rest_benched
        };
        fighter.fatigue = (fighter.fatigue - rest).max(0);
        fighter.played_this_match = false;
        fighter.was_kod_this_match = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FighterId, Position, Race, Region, Role};
    use crate::roster::{
        basic_strike_id, register_basic_strikes, role_stamina, Injury, InjurySeverity,
        RoleTemplate,
    };
    use smallvec::smallvec;

    fn fighter(id: u32, name: &str, role: Role) -> Fighter {
        let template = RoleTemplate::of(role);
        Fighter {
            id: FighterId::new(id),
            name: name.to_string(),
            race: Race::Canine,
            role,
            region: Region::DieselpunkCold,
            attack: template.attack,
            defense: template.defense,
            speed: template.speed,
            max_sp: template.base_sp,
            current_sp: template.base_sp,
            stamina: role_stamina(role),
            fatigue: 0,
            injury: None,
            abilities: smallvec![basic_strike_id(role)],
            buffs: Vec::new(),
            debuffs: Vec::new(),
            position: Position::Center,
            played_this_match: false,
            was_kod_this_match: false,
            cover_used_this_round: false,
        }
    }

    fn team(id: u32, name: &str) -> Team {
        Team {
            id: TeamId::new(id),
            name: name.to_string(),
            region: Region::DieselpunkCold,
            fighters: vec![
                fighter(id * 10 + 1, &format!("{name}-T"), Role::Tank),
                fighter(id * 10 + 2, &format!("{name}-D"), Role::Dps),
                fighter(id * 10 + 3, &format!("{name}-S"), Role::Support),
            ],
        }
    }

    fn registry() -> AbilityRegistry {
        let mut registry = AbilityRegistry::new();
        register_basic_strikes(&mut registry);
        registry
    }

    #[test]
    fn test_best_of_three_stops_at_two_wins() {
        let registry = registry();
        let config = CombatConfig::default();

        for seed in 0..20 {
            let mut rng = SimRng::new(seed);
            let mut a = team(1, "Alphas");
            let mut b = team(2, "Betas");

            let result = play_series(
                &mut a, &mut b, SeriesFormat::BestOfThree, &registry, &config, &mut rng,
            );

            assert!(result.outcome != SeriesOutcome::Draw);
            assert_eq!(result.wins_a.max(result.wins_b), 2);
            assert!(result.wins_a + result.wins_b <= 3);
        }
    }

    #[test]
    fn test_best_of_two_plays_exactly_two_rounds() {
        let registry = registry();
        let config = CombatConfig::default();

        let mut saw_draw = false;
        for seed in 0..40 {
            let mut rng = SimRng::new(seed);
            let mut a = team(1, "Alphas");
            let mut b = team(2, "Betas");

            let result = play_series(
                &mut a, &mut b, SeriesFormat::BestOfTwo, &registry, &config, &mut rng,
            );

            assert_eq!(result.wins_a + result.wins_b, 2);
            if result.outcome == SeriesOutcome::Draw {
                assert_eq!((result.wins_a, result.wins_b), (1, 1));
                saw_draw = true;
            }
        }
        assert!(saw_draw, "draws should occur across 40 seeds");
    }

    #[test]
    fn test_fatigue_applied_once_per_series() {
        let registry = registry();
        let config = CombatConfig::default();
        let mut rng = SimRng::new(5);

        let mut a = team(1, "Alphas");
        let mut b = team(2, "Betas");
        a.fighters.push(fighter(99, "Benchwarmer", Role::Dps));

        play_series(
            &mut a, &mut b, SeriesFormat::BestOfTwo, &registry, &config, &mut rng,
        );

        for f in &a.fighters {
            if f.name == "Benchwarmer" {
                assert_eq!(f.fatigue, 0, "bench gains no fatigue");
            } else {
                // Base 2, +1 only if KO'd in the match.
                let expected_min = config.fatigue.base_gain;
                let expected_max = config.fatigue.base_gain + config.fatigue.ko_extra;
                assert!((expected_min..=expected_max).contains(&f.fatigue));
            }
        }
    }

    #[test]
    fn test_injury_progression_touches_bench() {
        let registry = registry();
        let config = CombatConfig::default();
        let mut rng = SimRng::new(5);

        let mut a = team(1, "Alphas");
        let mut b = team(2, "Betas");
        a.fighters.push({
            let mut f = fighter(99, "Mending", Role::Dps);
            f.injury = Some(Injury::new(InjurySeverity::Moderate, 2));
            f
        });

        play_series(
            &mut a, &mut b, SeriesFormat::BestOfTwo, &registry, &config, &mut rng,
        );

        let mending = a.fighters.iter().find(|f| f.name == "Mending").unwrap();
        assert_eq!(mending.injury.unwrap().games_remaining, 1);

        play_series(
            &mut a, &mut b, SeriesFormat::BestOfTwo, &registry, &config, &mut rng,
        );
        let mending = a.fighters.iter().find(|f| f.name == "Mending").unwrap();
        assert!(mending.injury.is_none(), "injury clears at zero");
    }

    #[test]
    fn test_recovery_floors_at_zero_and_resets_flags() {
        let config = CombatConfig::default();
        let mut a = team(1, "Alphas");
        a.fighters[0].fatigue = 1;
        a.fighters[0].played_this_match = true;
        a.fighters[0].was_kod_this_match = true;
        a.fighters[1].fatigue = 0;

        recover_between_series(&mut a, &config.fatigue);

        assert_eq!(a.fighters[0].fatigue, 0);
        assert!(!a.fighters[0].played_this_match);
        assert!(!a.fighters[0].was_kod_this_match);
        assert_eq!(a.fighters[1].fatigue, 0);
    }

    #[test]
    fn test_forfeit_walkover() {
        let registry = registry();
        let config = CombatConfig::default();
        let mut rng = SimRng::new(5);

        let mut a = team(1, "Alphas");
        for f in &mut a.fighters {
            f.injury = Some(Injury::new(InjurySeverity::Major, 6));
        }
        let mut b = team(2, "Betas");

        let result = play_series(
            &mut a, &mut b, SeriesFormat::BestOfThree, &registry, &config, &mut rng,
        );

        assert_eq!(result.outcome, SeriesOutcome::TeamB);
        assert_eq!((result.wins_a, result.wins_b), (0, 0));
        assert!(result.log.lines()[0].contains("walkover"));
        // Injuries still progressed for the forfeiting side.
        assert!(a
            .fighters
            .iter()
            .all(|f| f.injury.unwrap().games_remaining == 5));
    }

    #[test]
    fn test_outcome_winner_helper() {
        let a = TeamId::new(1);
        let b = TeamId::new(2);
        assert_eq!(SeriesOutcome::TeamA.winner(a, b), Some(a));
        assert_eq!(SeriesOutcome::TeamB.winner(a, b), Some(b));
        assert_eq!(SeriesOutcome::Draw.winner(a, b), None);
    }
}
