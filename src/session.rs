//! Driver-owned game session.
//!
//! A `Session` holds everything a running game needs: the built rosters,
//! the domestic league state, the continental coefficient history, the
//! season counter, the tuning config, and the one shared RNG. There is
//! no module-level state anywhere in the crate: a driver owns a
//! `Session` and steps it.

use rustc_hash::FxHashMap;

use crate::abilities::AbilityRegistry;
use crate::combat::{play_series, recover_between_series, SeriesFormat, SeriesResult};
use crate::core::{CombatConfig, Region, RosterError, SimRng, TeamId};
use crate::league::{DayReport, LeagueState};
use crate::mcl::{CoefficientHistory, MclSeasonResult, MclState, StepReport};
use crate::roster::{build_team, pair_by_ids, register_basic_strikes, RosterData, Team};

/// A running game: rosters, league, tournament history, RNG.
#[derive(Debug)]
pub struct Session {
    pub teams: Vec<Team>,
    pub elite_teams: Vec<Team>,
    pub registry: AbilityRegistry,
    pub config: CombatConfig,
    pub leagues: LeagueState,
    pub coefficients: CoefficientHistory,
    mcl: Option<MclState>,
    season_number: u32,
    rng: SimRng,
}

impl Session {
    /// Start a new game from ingested roster data.
    ///
    /// Builds every team (failing fast on malformed stubs), registers
    /// the ability catalog plus the synthesized basic strikes, and lays
    /// out the regional leagues.
    pub fn new(data: &RosterData, seed: u64) -> Result<Self, RosterError> {
        let mut registry = AbilityRegistry::from_catalog(data.abilities.iter().cloned());
        register_basic_strikes(&mut registry);

        let mut rng = SimRng::new(seed);

        let teams = data
            .teams
            .iter()
            .map(|stub| build_team(stub, &registry, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        let elite_teams = data
            .elite_teams
            .iter()
            .map(|stub| build_team(stub, &registry, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        let leagues = LeagueState::new(&teams);

        Ok(Self {
            teams,
            elite_teams,
            registry,
            config: CombatConfig::default(),
            leagues,
            coefficients: CoefficientHistory::new(),
            mcl: None,
            season_number: 1,
            rng: SimRng::new(seed.wrapping_add(1)),
        })
    }

    /// The continental season counter (starts at 1).
    #[must_use]
    pub fn season_number(&self) -> u32 {
        self.season_number
    }

    /// The continental season in progress, if one was started.
    #[must_use]
    pub fn mcl(&self) -> Option<&MclState> {
        self.mcl.as_ref()
    }

    /// Play a one-off best-of-three between two domestic teams, with
    /// the usual aftermath and recovery. Returns `None` when either ID
    /// is unknown or the IDs match.
    pub fn play_exhibition(&mut self, a: TeamId, b: TeamId) -> Option<SeriesResult> {
        let (team_a, team_b) = pair_by_ids(&mut self.teams, a, b)?;
        let result = play_series(
            team_a,
            team_b,
            SeriesFormat::BestOfThree,
            &self.registry,
            &self.config,
            &mut self.rng,
        );
        recover_between_series(team_a, &self.config.fatigue);
        recover_between_series(team_b, &self.config.fatigue);
        Some(result)
    }

    /// Advance the domestic leagues by one day.
    pub fn advance_league_day(&mut self) -> DayReport {
        self.leagues.advance_day(
            &mut self.teams,
            &self.registry,
            &self.config,
            &mut self.rng,
        )
    }

    /// Run the domestic leagues to the end of the season and return the
    /// full log, finishing with each tier's final table.
    pub fn simulate_all_leagues(&mut self) -> Vec<String> {
        let mut lines = vec!["=== Domestic League Simulation ===".to_string()];
        lines.extend(self.leagues.simulate_to_end(
            &mut self.teams,
            &self.registry,
            &self.config,
            &mut self.rng,
        ));

        for tier in self.leagues.tiers() {
            if tier.team_ids.len() < 2 {
                continue;
            }
            lines.push(format!(
                "{} Tier {} Final Table:",
                tier.region,
                tier.tier_index + 1
            ));
            for (position, row) in tier.table.sorted_standings().iter().enumerate() {
                lines.push(format!(
                    "  {}. {} - {} pts (W:{} D:{} L:{}) [SP diff: {}]",
                    position + 1,
                    row.name,
                    row.points,
                    row.wins,
                    row.draws,
                    row.losses,
                    row.sp_diff()
                ));
            }
        }

        lines
    }

    /// Domestic standings per region, for continental seeding. Only
    /// meaningful once league play has happened.
    #[must_use]
    pub fn domestic_standings(&self) -> FxHashMap<Region, Vec<TeamId>> {
        self.leagues.domestic_standings()
    }

    /// Begin this season's continental tournament. Completed league
    /// standings seed the qualifier order when available.
    pub fn start_mcl_season(&mut self) {
        let standings = if self.leagues.day() > 0 {
            Some(self.domestic_standings())
        } else {
            None
        };
        self.mcl = Some(MclState::new(
            self.season_number,
            &self.teams,
            &self.elite_teams,
            &self.coefficients,
            standings.as_ref(),
        ));
    }

    /// Advance the continental tournament by one step, starting it
    /// first if needed. On completion the coefficient history is
    /// recorded and the season counter moves on.
    pub fn advance_mcl_step(&mut self) -> StepReport {
        if self.mcl.is_none() {
            self.start_mcl_season();
        }

        let report = {
            let mcl = self.mcl.as_mut().expect("mcl state just ensured");
            mcl.advance_step(&self.registry, &self.config, &mut self.rng)
        };

        if report.completed {
            self.finalize_mcl(report.result.as_ref());
        }
        report
    }

    /// Run a whole continental season to completion.
    pub fn simulate_mcl_season(&mut self) -> Option<MclSeasonResult> {
        if self.mcl.is_none() {
            self.start_mcl_season();
        }

        let (_, result) = {
            let mcl = self.mcl.as_mut().expect("mcl state just ensured");
            mcl.run_to_completion(&self.registry, &self.config, &mut self.rng)
        };

        self.finalize_mcl(result.as_ref());
        result
    }

    fn finalize_mcl(&mut self, result: Option<&MclSeasonResult>) {
        if let Some(result) = result {
            self.coefficients = result.coefficient_history.clone();
            self.season_number += 1;
        }
        self.mcl = None;
    }
}
