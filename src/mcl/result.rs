//! Finalized continental season records.
//!
//! These are the structured outputs a renderer consumes: conference
//! tables, series records for the knockout ladder, region points, and
//! the updated coefficient state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::coefficients::CoefficientHistory;
use crate::combat::{SeriesOutcome, SeriesResult};
use crate::core::{Region, TeamId};
use crate::league::TableRow;

/// A completed knockout series between two named teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub team_a: TeamId,
    pub team_a_name: String,
    pub team_b: TeamId,
    pub team_b_name: String,
    pub wins_a: u32,
    pub wins_b: u32,
    pub outcome: SeriesOutcome,
    pub winner: TeamId,
    pub winner_name: String,
}

impl SeriesRecord {
    /// Record a best-of-three result. Knockout series never draw, so a
    /// drawn outcome falls back to side A (unreachable in practice).
    #[must_use]
    pub fn from_series(
        (team_a, team_a_name): (TeamId, &str),
        (team_b, team_b_name): (TeamId, &str),
        result: &SeriesResult,
    ) -> Self {
        let (winner, winner_name) = match result.outcome {
            SeriesOutcome::TeamB => (team_b, team_b_name),
            SeriesOutcome::TeamA | SeriesOutcome::Draw => (team_a, team_a_name),
        };
        Self {
            team_a,
            team_a_name: team_a_name.to_string(),
            team_b,
            team_b_name: team_b_name.to_string(),
            wins_a: result.wins_a,
            wins_b: result.wins_b,
            outcome: result.outcome,
            winner,
            winner_name: winner_name.to_string(),
        }
    }
}

/// Both wildcard series: second versus third place in each conference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WildcardRound {
    pub elite: SeriesRecord,
    pub continental: SeriesRecord,
}

/// The two semifinals and the finalists they produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemifinalRound {
    /// Elite champion versus continental wildcard winner.
    pub semifinal_1: SeriesRecord,
    /// Continental champion versus elite wildcard winner.
    pub semifinal_2: SeriesRecord,
    pub finalists: (TeamId, TeamId),
}

/// Everything a finished continental season produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MclSeasonResult {
    pub season_number: u32,
    pub slots_used: FxHashMap<Region, usize>,
    /// Elite conference final table, best first.
    pub elite_table: Vec<TableRow>,
    /// Continental conference final table, best first.
    pub continental_table: Vec<TableRow>,
    pub wildcards: WildcardRound,
    pub semifinals: SemifinalRound,
    pub grand_final: SeriesRecord,
    pub champion: TeamId,
    pub champion_name: String,
    pub region_points: FxHashMap<Region, i64>,
    pub seasonal_scores: FxHashMap<Region, f64>,
    /// History after recording this season.
    pub coefficient_history: CoefficientHistory,
    pub next_season_slots: FxHashMap<Region, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::MatchLog;

    #[test]
    fn test_series_record_winner() {
        let result = SeriesResult {
            outcome: SeriesOutcome::TeamB,
            wins_a: 1,
            wins_b: 2,
            log: MatchLog::new(),
        };

        let record = SeriesRecord::from_series(
            (TeamId::new(1), "Alphas"),
            (TeamId::new(2), "Betas"),
            &result,
        );

        assert_eq!(record.winner, TeamId::new(2));
        assert_eq!(record.winner_name, "Betas");
        assert_eq!((record.wins_a, record.wins_b), (1, 2));
    }
}
