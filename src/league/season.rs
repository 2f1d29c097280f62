//! Stepwise domestic season.
//!
//! `LeagueState` tracks every regional tier's fixtures, table, and
//! current round. One "day" plays exactly one fixture round in every
//! tier that still has rounds left, then lets the participants recover.
//! Running a whole season is just advancing days until nothing is left
//! to play; there is no separate atomic path to drift from.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fixtures::round_robin_rounds;
use super::table::{LeagueTable, LEAGUE_POINTS};
use super::tiers::build_regional_leagues;
use crate::abilities::AbilityRegistry;
use crate::combat::{play_series, recover_between_series, SeriesFormat, SeriesOutcome};
use crate::core::{CombatConfig, Region, SimRng, TeamId};
use crate::roster::{pair_by_ids, Team};

/// One tier's season-in-progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierState {
    pub region: Region,
    pub tier_index: usize,
    pub team_ids: Vec<TeamId>,
    fixtures: Vec<Vec<(usize, usize)>>,
    pub table: LeagueTable,
    round_index: usize,
    notice_emitted: bool,
}

impl TierState {
    /// Has every fixture round been played?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round_index >= self.fixtures.len()
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.round_index
    }

    /// Total fixture rounds.
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.fixtures.len()
    }
}

/// A match played during a league day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMatch {
    pub region: Region,
    pub tier_index: usize,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub outcome: SeriesOutcome,
    pub wins_a: u32,
    pub wins_b: u32,
}

/// What one league day produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub lines: Vec<String>,
    pub matches: Vec<PlayedMatch>,
}

/// The domestic season across all regions and tiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    tiers: Vec<TierState>,
    day: usize,
}

impl LeagueState {
    /// Build a fresh season: group by region, split into tiers, generate
    /// fixtures, zero the tables.
    #[must_use]
    pub fn new(teams: &[Team]) -> Self {
        let name_of = |id: TeamId| -> String {
            teams
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.name.clone())
                .unwrap_or_default()
        };

        let mut tiers = Vec::new();
        for (region, tier_lists) in build_regional_leagues(teams) {
            for (tier_index, team_ids) in tier_lists.into_iter().enumerate() {
                let fixtures = round_robin_rounds(team_ids.len());
                let table = LeagueTable::new(team_ids.iter().map(|&id| (id, name_of(id))));
                tiers.push(TierState {
                    region,
                    tier_index,
                    team_ids,
                    fixtures,
                    table,
                    round_index: 0,
                    notice_emitted: false,
                });
            }
        }

        Self { tiers, day: 0 }
    }

    /// Every tier, in region/tier order.
    #[must_use]
    pub fn tiers(&self) -> &[TierState] {
        &self.tiers
    }

    /// Look up one tier.
    #[must_use]
    pub fn tier(&self, region: Region, tier_index: usize) -> Option<&TierState> {
        self.tiers
            .iter()
            .find(|t| t.region == region && t.tier_index == tier_index)
    }

    /// League days advanced so far.
    #[must_use]
    pub fn day(&self) -> usize {
        self.day
    }

    /// Is the whole domestic season finished?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiers
            .iter()
            .all(|t| t.is_complete() || t.team_ids.len() < 2)
    }

    /// Play one round in every tier that still has fixtures, recovering
    /// fatigue for that tier's teams afterwards.
    pub fn advance_day(
        &mut self,
        teams: &mut [Team],
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
    ) -> DayReport {
        let mut report = DayReport::default();

        if self.is_complete() {
            report.lines.push("Domestic season already complete.".to_string());
            return report;
        }

        self.day += 1;
        report.lines.push(format!("=== League Day {} ===", self.day));
        debug!(day = self.day, "league day start");

        for tier in &mut self.tiers {
            if tier.team_ids.len() < 2 {
                if !tier.notice_emitted {
                    report.lines.push(format!(
                        "{} Tier {}: not enough teams to form a league.",
                        tier.region,
                        tier.tier_index + 1
                    ));
                    tier.notice_emitted = true;
                }
                continue;
            }
            if tier.is_complete() {
                continue;
            }

            report.lines.push(format!(
                "{} Tier {} - Round {}",
                tier.region,
                tier.tier_index + 1,
                tier.round_index + 1
            ));

            let round = tier.fixtures[tier.round_index].clone();
            for (i, j) in round {
                let id_a = tier.team_ids[i];
                let id_b = tier.team_ids[j];
                let Some((team_a, team_b)) = pair_by_ids(teams, id_a, id_b) else {
                    continue;
                };

                let result =
                    play_series(team_a, team_b, SeriesFormat::BestOfTwo, registry, config, rng);

                let line = match result.outcome {
                    SeriesOutcome::Draw => format!(
                        "• {} {}-{} {} (Draw)",
                        team_a.name, result.wins_a, result.wins_b, team_b.name
                    ),
                    SeriesOutcome::TeamA => format!(
                        "• {} {}-{} {} ({} win)",
                        team_a.name, result.wins_a, result.wins_b, team_b.name, team_a.name
                    ),
                    SeriesOutcome::TeamB => format!(
                        "• {} {}-{} {} ({} win)",
                        team_a.name, result.wins_a, result.wins_b, team_b.name, team_b.name
                    ),
                };
                report.lines.push(line);

                tier.table.record(id_a, id_b, &result, LEAGUE_POINTS);
                report.matches.push(PlayedMatch {
                    region: tier.region,
                    tier_index: tier.tier_index,
                    team_a: id_a,
                    team_b: id_b,
                    outcome: result.outcome,
                    wins_a: result.wins_a,
                    wins_b: result.wins_b,
                });
            }

            // Everyone in the tier rests after the round, bench included.
            for &id in &tier.team_ids {
                if let Some(team) = teams.iter_mut().find(|t| t.id == id) {
                    recover_between_series(team, &config.fatigue);
                }
            }

            tier.round_index += 1;
        }

        report
    }

    /// Drive the season to completion, concatenating every day's lines.
    pub fn simulate_to_end(
        &mut self,
        teams: &mut [Team],
        registry: &AbilityRegistry,
        config: &CombatConfig,
        rng: &mut SimRng,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        while !self.is_complete() {
            let report = self.advance_day(teams, registry, config, rng);
            lines.extend(report.lines);
        }
        lines
    }

    /// Per-region team orderings for continental seeding: tier 1 first,
    /// each tier in final-standings order.
    #[must_use]
    pub fn domestic_standings(&self) -> FxHashMap<Region, Vec<TeamId>> {
        let mut standings: FxHashMap<Region, Vec<TeamId>> = FxHashMap::default();
        for tier in &self.tiers {
            let entry = standings.entry(tier.region).or_default();
            entry.extend(tier.table.sorted_standings().iter().map(|row| row.team));
        }
        standings
    }
}
