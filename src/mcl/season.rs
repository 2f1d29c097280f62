//! The continental season state machine.
//!
//! A season runs `conferences -> wildcards -> semifinals -> grand final
//! -> complete`. `advance_step` is the only implementation: it plays one
//! discrete step per call (one conference round, the bonus award, one
//! knockout series, ...) and `run_to_completion` simply loops it, so the
//! stepwise and atomic call styles cannot diverge.
//!
//! Entrants are cloned and reset at state creation; the domestic rosters
//! handed in are read, never mutated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::coefficients::{seasonal_scores, slots_for_season, CoefficientHistory};
use super::qualifiers::{clone_for_tournament, pick_qualifiers};
use super::result::{MclSeasonResult, SemifinalRound, SeriesRecord, WildcardRound};
use crate::abilities::AbilityRegistry;
use crate::combat::{
    play_series, recover_between_series, SeriesFormat, SeriesOutcome, SeriesResult,
};
use crate::core::{CombatConfig, Region, SimRng, TeamId};
use crate::league::{round_robin_rounds, LeagueTable, TableRow, CONFERENCE_POINTS};
use crate::roster::{pair_by_ids, Team};

/// Region points for winning a conference match (draws pay 1 each).
const CONFERENCE_WIN_POINTS: i64 = 2;
const CONFERENCE_DRAW_POINTS: i64 = 1;
/// Region points for finishing in a conference's top three.
const TOP_THREE_BONUS: i64 = 1;
/// Region points for winning any knockout series.
const SERIES_WIN_POINTS: i64 = 2;
/// Region points for reaching the semifinals.
const SEMIFINALIST_BONUS: i64 = 2;
/// Region points for reaching the grand final.
const FINALIST_BONUS: i64 = 3;
/// Region points for winning the grand final.
const CHAMPION_BONUS: i64 = 5;

/// One conference's round-robin in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ConferenceState {
    label: String,
    teams: Vec<Team>,
    fixtures: Vec<Vec<(usize, usize)>>,
    table: LeagueTable,
    round_index: usize,
    completed: bool,
}

impl ConferenceState {
    fn new(label: impl Into<String>, teams: Vec<Team>) -> Self {
        let fixtures = round_robin_rounds(teams.len());
        let table = LeagueTable::new(teams.iter().map(|t| (t.id, t.name.clone())));
        let completed = fixtures.is_empty();
        Self {
            label: label.into(),
            teams,
            fixtures,
            table,
            round_index: 0,
            completed,
        }
    }

    fn find_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    fn region_of(&self, id: TeamId) -> Option<Region> {
        self.teams.iter().find(|t| t.id == id).map(|t| t.region)
    }

    /// Final standings, best first.
    fn standings(&self) -> Vec<TableRow> {
        self.table.sorted_conference().into_iter().cloned().collect()
    }
}

/// What one advancement step produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub lines: Vec<String>,
    pub completed: bool,
    pub result: Option<MclSeasonResult>,
}

/// Knockout ladder bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct KnockoutProgress {
    elite_wildcard: Option<SeriesRecord>,
    continental_wildcard: Option<SeriesRecord>,
    semifinal_1: Option<SeriesRecord>,
    semifinal_2: Option<SeriesRecord>,
}

/// A continental season in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MclState {
    season_number: u32,
    slots_used: FxHashMap<Region, usize>,
    history_in: CoefficientHistory,
    elite: ConferenceState,
    continental: ConferenceState,
    region_points: FxHashMap<Region, i64>,
    team_counts: FxHashMap<Region, usize>,
    bonuses_awarded: bool,
    semifinalists_awarded: bool,
    knockouts: KnockoutProgress,
    completed: bool,
    result: Option<MclSeasonResult>,
}

impl MclState {
    /// Set up a season: compute slots, select and clone the entrants,
    /// build both conference schedules.
    #[must_use]
    pub fn new(
        season_number: u32,
        teams: &[Team],
        elite_teams: &[Team],
        history: &CoefficientHistory,
        standings: Option<&FxHashMap<Region, Vec<TeamId>>>,
    ) -> Self {
        let slots_used = slots_for_season(history, season_number);
        let qualifiers = pick_qualifiers(teams, &slots_used, standings);
        let elite_entrants: Vec<Team> = elite_teams.iter().map(clone_for_tournament).collect();

        let mut region_points = FxHashMap::default();
        let mut team_counts: FxHashMap<Region, usize> = FxHashMap::default();
        for region in Region::ALL {
            region_points.insert(region, 0i64);
            team_counts.insert(region, 0usize);
        }
        for team in elite_entrants.iter().chain(qualifiers.iter()) {
            *team_counts.entry(team.region).or_default() += 1;
        }

        debug!(
            season = season_number,
            elite = elite_entrants.len(),
            qualifiers = qualifiers.len(),
            "continental season created"
        );

        Self {
            season_number,
            slots_used,
            history_in: history.clone(),
            elite: ConferenceState::new("LED Conference", elite_entrants),
            continental: ConferenceState::new("Continental Conference", qualifiers),
            region_points,
            team_counts,
            bonuses_awarded: false,
            semifinalists_awarded: false,
            knockouts: KnockoutProgress::default(),
            completed: false,
            result: None,
        }
    }

    /// Season number this state is running.
    #[must_use]
    pub fn season_number(&self) -> u32 {
        self.season_number
    }

    /// Slot allocation this season used.
    #[must_use]
    pub fn slots_used(&self) -> &FxHashMap<Region, usize> {
        &self.slots_used
    }

    /// Has the season finished?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// The finalized result, present once complete.
    #[must_use]
    pub fn result(&self) -> Option<&MclSeasonResult> {
        self.result.as_ref()
    }

    /// Advance the season by one logical step.
    pub fn advance_step(
        &mut self,
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
    ) -> StepReport {
        let mut lines = Vec::new();

        if self.completed {
            lines.push("MCL season already completed.".to_string());
            return StepReport {
                lines,
                completed: true,
                result: self.result.clone(),
            };
        }

        // A conference without enough teams cannot produce a champion;
        // report once and finish.
        if self.elite.teams.len() < 3 || self.continental.teams.len() < 3 {
            lines.push(format!(
                "MCL cannot run: {} has {} team(s), {} has {} team(s); at least 3 each required.",
                self.elite.label,
                self.elite.teams.len(),
                self.continental.label,
                self.continental.teams.len()
            ));
            self.completed = true;
            return StepReport {
                lines,
                completed: true,
                result: None,
            };
        }

        // 1-2) Conference round-robins, one round per step, elite first.
        if !self.elite.completed {
            Self::play_conference_round(
                &mut self.elite,
                &mut self.region_points,
                registry,
                config,
                rng,
                &mut lines,
            );
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }
        if !self.continental.completed {
            Self::play_conference_round(
                &mut self.continental,
                &mut self.region_points,
                registry,
                config,
                rng,
                &mut lines,
            );
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }

        let elite_rows = self.elite.standings();
        let continental_rows = self.continental.standings();

        // 3) Top-three bonuses, once.
        if !self.bonuses_awarded {
            for row in elite_rows.iter().take(3).chain(continental_rows.iter().take(3)) {
                if let Some(region) = self
                    .elite
                    .region_of(row.team)
                    .or_else(|| self.continental.region_of(row.team))
                {
                    *self.region_points.entry(region).or_default() += TOP_THREE_BONUS;
                }
            }
            self.bonuses_awarded = true;
            lines.push("Awarded regional bonuses for top 3 clubs in each conference.".to_string());
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }

        // 4) Wildcards: 2nd vs 3rd in each conference.
        if self.knockouts.elite_wildcard.is_none() {
            lines.push("=== MCL Wildcards ===".to_string());
            let record = Self::play_knockout_within(
                &mut self.elite,
                elite_rows[1].team,
                elite_rows[2].team,
                &mut self.region_points,
                registry,
                config,
                rng,
                &mut lines,
            );
            self.knockouts.elite_wildcard = Some(record);
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }

        if self.knockouts.continental_wildcard.is_none() {
            lines.push("=== MCL Wildcards ===".to_string());
            let record = Self::play_knockout_within(
                &mut self.continental,
                continental_rows[1].team,
                continental_rows[2].team,
                &mut self.region_points,
                registry,
                config,
                rng,
                &mut lines,
            );
            self.knockouts.continental_wildcard = Some(record);
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }

        let elite_champion = elite_rows[0].team;
        let continental_champion = continental_rows[0].team;
        let elite_wildcard_winner = self.knockouts.elite_wildcard.as_ref().unwrap().winner;
        let continental_wildcard_winner =
            self.knockouts.continental_wildcard.as_ref().unwrap().winner;

        // +2 for every semifinalist's region, once, on entry.
        if !self.semifinalists_awarded {
            for team in [
                elite_champion,
                continental_champion,
                elite_wildcard_winner,
                continental_wildcard_winner,
            ] {
                if let Some(region) = self
                    .elite
                    .region_of(team)
                    .or_else(|| self.continental.region_of(team))
                {
                    *self.region_points.entry(region).or_default() += SEMIFINALIST_BONUS;
                }
            }
            self.semifinalists_awarded = true;
        }

        // 5) Semifinals, cross-conference.
        if self.knockouts.semifinal_1.is_none() {
            lines.push("=== MCL Semifinals ===".to_string());
            let record = self.play_knockout_across(
                elite_champion,
                continental_wildcard_winner,
                registry,
                config,
                rng,
                &mut lines,
            );
            self.award_region_points(record.winner, FINALIST_BONUS);
            self.knockouts.semifinal_1 = Some(record);
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }

        if self.knockouts.semifinal_2.is_none() {
            lines.push("=== MCL Semifinals ===".to_string());
            let record = self.play_knockout_across(
                continental_champion,
                elite_wildcard_winner,
                registry,
                config,
                rng,
                &mut lines,
            );
            self.award_region_points(record.winner, FINALIST_BONUS);
            self.knockouts.semifinal_2 = Some(record);
            return StepReport {
                lines,
                completed: false,
                result: None,
            };
        }

        // 6) Grand final, then seal the season.
        lines.push("=== MCL Grand Final ===".to_string());
        let finalist_1 = self.knockouts.semifinal_1.as_ref().unwrap().winner;
        let finalist_2 = self.knockouts.semifinal_2.as_ref().unwrap().winner;

        let final_record =
            self.play_knockout_across(finalist_1, finalist_2, registry, config, rng, &mut lines);
        self.award_region_points(final_record.winner, CHAMPION_BONUS);
        lines.push(format!("Champion: {}.", final_record.winner_name));

        let scores = seasonal_scores(&self.region_points, &self.team_counts);
        let mut updated_history = self.history_in.clone();
        updated_history.record_season(&scores);
        let next_slots = slots_for_season(&updated_history, self.season_number + 1);

        let result = MclSeasonResult {
            season_number: self.season_number,
            slots_used: self.slots_used.clone(),
            elite_table: elite_rows,
            continental_table: continental_rows,
            wildcards: WildcardRound {
                elite: self.knockouts.elite_wildcard.clone().unwrap(),
                continental: self.knockouts.continental_wildcard.clone().unwrap(),
            },
            semifinals: SemifinalRound {
                semifinal_1: self.knockouts.semifinal_1.clone().unwrap(),
                semifinal_2: self.knockouts.semifinal_2.clone().unwrap(),
                finalists: (finalist_1, finalist_2),
            },
            grand_final: final_record.clone(),
            champion: final_record.winner,
            champion_name: final_record.winner_name,
            region_points: self.region_points.clone(),
            seasonal_scores: scores,
            coefficient_history: updated_history,
            next_season_slots: next_slots,
        };

        self.completed = true;
        self.result = Some(result.clone());
        debug!(season = self.season_number, champion = %result.champion_name, "continental season complete");

        StepReport {
            lines,
            completed: true,
            result: Some(result),
        }
    }

    /// Drive the remaining steps, concatenating every step's lines.
    ///
    /// Produces results identical to stepping manually with the same
    /// RNG: this is the same code path.
    pub fn run_to_completion(
        &mut self,
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
    ) -> (Vec<String>, Option<MclSeasonResult>) {
        let mut lines = Vec::new();
        loop {
            let report = self.advance_step(registry, config, rng);
            lines.extend(report.lines);
            if report.completed {
                return (lines, report.result);
            }
        }
    }

    fn award_region_points(&mut self, team: TeamId, amount: i64) {
        if let Some(region) = self
            .elite
            .region_of(team)
            .or_else(|| self.continental.region_of(team))
        {
            *self.region_points.entry(region).or_default() += amount;
        }
    }

    /// Play one round of a conference's round-robin.
    fn play_conference_round(
        conference: &mut ConferenceState,
        region_points: &mut FxHashMap<Region, i64>,
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
        lines: &mut Vec<String>,
    ) {
        if conference.round_index >= conference.fixtures.len() {
            conference.completed = true;
            return;
        }

        lines.push(format!("=== MCL {} ===", conference.label));
        lines.push(format!("Round {}", conference.round_index + 1));

        let round = conference.fixtures[conference.round_index].clone();
        for (i, j) in round {
            let id_a = conference.teams[i].id;
            let id_b = conference.teams[j].id;
            let region_a = conference.teams[i].region;
            let region_b = conference.teams[j].region;

            let Some((team_a, team_b)) = pair_by_ids(&mut conference.teams, id_a, id_b) else {
                continue;
            };
            let result =
                play_series(team_a, team_b, SeriesFormat::BestOfTwo, registry, config, rng);

            let desc = match result.outcome {
                SeriesOutcome::Draw => format!(
                    "{} {}-{} {} (Draw)",
                    team_a.name, result.wins_a, result.wins_b, team_b.name
                ),
                SeriesOutcome::TeamA => format!(
                    "{} {}-{} {} ({} win)",
                    team_a.name, result.wins_a, result.wins_b, team_b.name, team_a.name
                ),
                SeriesOutcome::TeamB => format!(
                    "{} {}-{} {} ({} win)",
                    team_a.name, result.wins_a, result.wins_b, team_b.name, team_b.name
                ),
            };
            lines.push(format!("  {desc}"));

            conference.table.record(id_a, id_b, &result, CONFERENCE_POINTS);
            match result.outcome {
                SeriesOutcome::TeamA => {
                    *region_points.entry(region_a).or_default() += CONFERENCE_WIN_POINTS;
                }
                SeriesOutcome::TeamB => {
                    *region_points.entry(region_b).or_default() += CONFERENCE_WIN_POINTS;
                }
                SeriesOutcome::Draw => {
                    *region_points.entry(region_a).or_default() += CONFERENCE_DRAW_POINTS;
                    *region_points.entry(region_b).or_default() += CONFERENCE_DRAW_POINTS;
                }
            }
        }

        for team in &mut conference.teams {
            recover_between_series(team, &config.fatigue);
        }

        conference.round_index += 1;
        if conference.round_index >= conference.fixtures.len() {
            conference.completed = true;
            if let Some(leader) = conference.table.sorted_conference().first() {
                lines.push(format!(
                    "{} complete. Top team: {} ({} pts).",
                    conference.label, leader.name, leader.points
                ));
            }
        }
    }

    /// Play a best-of-three between two teams of the same conference,
    /// award the winner's region, and let both sides recover.
    #[allow(clippy::too_many_arguments)]
    fn play_knockout_within(
        conference: &mut ConferenceState,
        id_a: TeamId,
        id_b: TeamId,
        region_points: &mut FxHashMap<Region, i64>,
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
        lines: &mut Vec<String>,
    ) -> SeriesRecord {
        let (team_a, team_b) = pair_by_ids(&mut conference.teams, id_a, id_b)
            .expect("wildcard participants are distinct conference teams");

        let result = play_series(
            team_a, team_b, SeriesFormat::BestOfThree, registry, config, rng,
        );
        let record = SeriesRecord::from_series(
            (team_a.id, team_a.name.as_str()),
            (team_b.id, team_b.name.as_str()),
            &result,
        );
        lines.push(knockout_line(&record, &result));

        recover_between_series(team_a, &config.fatigue);
        recover_between_series(team_b, &config.fatigue);

        if let Some(region) = conference.region_of(record.winner) {
            *region_points.entry(region).or_default() += SERIES_WIN_POINTS;
        }
        record
    }

    /// Play a best-of-three whose sides may come from either conference.
    fn play_knockout_across(
        &mut self,
        id_a: TeamId,
        id_b: TeamId,
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
        lines: &mut Vec<String>,
    ) -> SeriesRecord {
        // Both in the same conference, or split across the two.
        let same_conference = self.elite.region_of(id_a).is_some()
            == self.elite.region_of(id_b).is_some();

        let result;
        let record;
        if same_conference {
            let conference = if self.elite.region_of(id_a).is_some() {
                &mut self.elite
            } else {
                &mut self.continental
            };
            let (team_a, team_b) =
                pair_by_ids(&mut conference.teams, id_a, id_b).expect("distinct teams");
            result = play_series(
                team_a, team_b, SeriesFormat::BestOfThree, registry, config, rng,
            );
            record = SeriesRecord::from_series(
                (team_a.id, team_a.name.as_str()),
                (team_b.id, team_b.name.as_str()),
                &result,
            );
            recover_between_series(team_a, &config.fatigue);
            recover_between_series(team_b, &config.fatigue);
        } else {
            let (first, second) = (&mut self.elite, &mut self.continental);
            let (team_a, team_b) = if first.region_of(id_a).is_some() {
                (
                    first.find_mut(id_a).expect("elite participant"),
                    second.find_mut(id_b).expect("continental participant"),
                )
            } else {
                (
                    second.find_mut(id_a).expect("continental participant"),
                    first.find_mut(id_b).expect("elite participant"),
                )
            };
            result = play_series(
                team_a, team_b, SeriesFormat::BestOfThree, registry, config, rng,
            );
            record = SeriesRecord::from_series(
                (team_a.id, team_a.name.as_str()),
                (team_b.id, team_b.name.as_str()),
                &result,
            );
            recover_between_series(team_a, &config.fatigue);
            recover_between_series(team_b, &config.fatigue);
        }

        lines.push(knockout_line(&record, &result));
        self.award_region_points(record.winner, SERIES_WIN_POINTS);
        record
    }
}

fn knockout_line(record: &SeriesRecord, result: &SeriesResult) -> String {
    format!(
        "{} {}-{} {} ({} wins)",
        record.team_a_name, result.wins_a, result.wins_b, record.team_b_name, record.winner_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FighterId, Race, Role};
    use crate::roster::{build_team, register_basic_strikes, FighterStub, TeamStub};

    fn registry() -> AbilityRegistry {
        let mut registry = AbilityRegistry::new();
        register_basic_strikes(&mut registry);
        registry
    }

    fn make_team(id: u32, name: &str, region: Region, rng: &mut SimRng) -> Team {
        let registry = registry();
        let stub = TeamStub {
            id: TeamId::new(id),
            name: name.to_string(),
            region,
            fighters: vec![
                FighterStub {
                    id: FighterId::new(id * 10 + 1),
                    name: format!("{name}-T"),
                    race: Race::Ursine,
                    role: Role::Tank,
                },
                FighterStub {
                    id: FighterId::new(id * 10 + 2),
                    name: format!("{name}-D"),
                    race: Race::Feline,
                    role: Role::Dps,
                },
                FighterStub {
                    id: FighterId::new(id * 10 + 3),
                    name: format!("{name}-S"),
                    race: Race::Mustelid,
                    role: Role::Support,
                },
            ],
        };
        build_team(&stub, &registry, rng).unwrap()
    }

    fn fixture() -> (Vec<Team>, Vec<Team>) {
        let mut rng = SimRng::new(99);
        let mut teams = Vec::new();
        let mut id = 1;
        for region in Region::POOL {
            for n in 0..4 {
                teams.push(make_team(id, &format!("{region} {n}"), region, &mut rng));
                id += 1;
            }
        }
        let elite: Vec<Team> = (0..4)
            .map(|n| {
                let team = make_team(id, &format!("Elite {n}"), Region::LedPunkElite, &mut rng);
                id += 1;
                team
            })
            .collect();
        (teams, elite)
    }

    #[test]
    fn test_season_runs_to_completion() {
        let (teams, elite) = fixture();
        let registry = registry();
        let config = CombatConfig::default();
        let history = CoefficientHistory::new();
        let mut rng = SimRng::new(7);

        let mut state = MclState::new(1, &teams, &elite, &history, None);
        let (lines, result) = state.run_to_completion(&registry, &config, &mut rng);
        let result = result.expect("season produced a result");

        assert!(state.is_complete());
        assert!(!lines.is_empty());
        assert_eq!(result.season_number, 1);
        assert_eq!(result.elite_table.len(), 4);
        // Default slots: 4 + 3 + 3 + 2 qualifiers.
        assert_eq!(result.continental_table.len(), 12);
        assert_eq!(result.champion, result.grand_final.winner);
    }

    #[test]
    fn test_stepwise_equals_atomic_for_same_seed() {
        let (teams, elite) = fixture();
        let registry = registry();
        let config = CombatConfig::default();
        let history = CoefficientHistory::new();

        let mut rng_a = SimRng::new(1234);
        let mut atomic = MclState::new(1, &teams, &elite, &history, None);
        let (_, result_atomic) = atomic.run_to_completion(&registry, &config, &mut rng_a);

        let mut rng_b = SimRng::new(1234);
        let mut stepwise = MclState::new(1, &teams, &elite, &history, None);
        let mut result_stepwise = None;
        for _ in 0..10_000 {
            let report = stepwise.advance_step(&registry, &config, &mut rng_b);
            if report.completed {
                result_stepwise = report.result;
                break;
            }
        }

        assert_eq!(result_atomic, result_stepwise);
    }

    #[test]
    fn test_domestic_rosters_untouched() {
        let (teams, elite) = fixture();
        let before = teams.clone();
        let registry = registry();
        let config = CombatConfig::default();
        let history = CoefficientHistory::new();
        let mut rng = SimRng::new(7);

        let mut state = MclState::new(1, &teams, &elite, &history, None);
        state.run_to_completion(&registry, &config, &mut rng);

        assert_eq!(teams, before, "tournament must never mutate domestic teams");
    }

    #[test]
    fn test_coefficient_history_updated_and_bounded() {
        let (teams, elite) = fixture();
        let registry = registry();
        let config = CombatConfig::default();
        let mut history = CoefficientHistory::new();
        let mut rng = SimRng::new(7);

        for season in 1..=5 {
            let mut state = MclState::new(season, &teams, &elite, &history, None);
            let (_, result) = state.run_to_completion(&registry, &config, &mut rng);
            history = result.unwrap().coefficient_history;
            for region in Region::ALL {
                assert!(history.scores_for(region).len() <= 3);
                assert_eq!(history.scores_for(region).len(), (season as usize).min(3));
            }
        }
    }

    #[test]
    fn test_region_points_all_non_negative_and_some_awarded() {
        let (teams, elite) = fixture();
        let registry = registry();
        let config = CombatConfig::default();
        let history = CoefficientHistory::new();
        let mut rng = SimRng::new(21);

        let mut state = MclState::new(1, &teams, &elite, &history, None);
        let (_, result) = state.run_to_completion(&registry, &config, &mut rng);
        let result = result.unwrap();

        let total: i64 = result.region_points.values().sum();
        assert!(total > 0);
        assert!(result.region_points.values().all(|&p| p >= 0));
        // The elite conference always banks points from its own matches.
        assert!(result.region_points[&Region::LedPunkElite] > 0);
    }

    #[test]
    fn test_undersized_conference_reports_and_stops() {
        let mut rng = SimRng::new(3);
        let teams = vec![make_team(1, "Lone", Region::DieselpunkCold, &mut rng)];
        let elite: Vec<Team> = (0..4)
            .map(|n| make_team(10 + n, &format!("Elite {n}"), Region::LedPunkElite, &mut rng))
            .collect();
        let registry = registry();
        let config = CombatConfig::default();
        let history = CoefficientHistory::new();

        let mut state = MclState::new(1, &teams, &elite, &history, None);
        let report = state.advance_step(&registry, &config, &mut rng);

        assert!(report.completed);
        assert!(report.result.is_none());
        assert!(report.lines[0].contains("cannot run"));
    }

    #[test]
    fn test_next_season_slots_follow_pattern() {
        let (teams, elite) = fixture();
        let registry = registry();
        let config = CombatConfig::default();
        let history = CoefficientHistory::new();
        let mut rng = SimRng::new(7);

        let mut state = MclState::new(1, &teams, &elite, &history, None);
        let (_, result) = state.run_to_completion(&registry, &config, &mut rng);
        let result = result.unwrap();

        let mut sizes: Vec<usize> = result
            .next_season_slots
            .values()
            .copied()
            .collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 3, 3, 4]);
    }
}
