//! Standings tables.
//!
//! One row per team, rebuilt each season. Domestic league play scores
//! 3/1/0 and sorts by points then SP difference (stable, so full ties
//! keep table order). Conference play in the continental tournament
//! scores 2/1/0 and breaks ties further by SP for, then team name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::combat::{SeriesOutcome, SeriesResult};
use crate::core::TeamId;

/// One team's standings row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub team: TeamId,
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Series round-wins for; the primary tiebreak metric ("SP diff").
    pub sp_for: u32,
    pub sp_against: u32,
}

impl TableRow {
    fn new(team: TeamId, name: String) -> Self {
        Self {
            team,
            name,
            points: 0,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            sp_for: 0,
            sp_against: 0,
        }
    }

    /// SP difference: round-wins for minus against.
    #[must_use]
    pub fn sp_diff(&self) -> i64 {
        i64::from(self.sp_for) - i64::from(self.sp_against)
    }
}

/// Match points awarded by a competition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointScheme {
    pub win: u32,
    pub draw: u32,
}

/// Domestic league scoring: 3 for a win, 1 each for a draw.
pub const LEAGUE_POINTS: PointScheme = PointScheme { win: 3, draw: 1 };
/// Conference scoring: 2 for a win, 1 each for a draw.
pub const CONFERENCE_POINTS: PointScheme = PointScheme { win: 2, draw: 1 };

/// A standings table over a fixed set of teams.
///
/// Rows keep their registration order, which makes the stable sorts
/// deterministic for a fixed team list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LeagueTable {
    rows: Vec<TableRow>,
    #[serde(skip)]
    index: FxHashMap<TeamId, usize>,
}

impl PartialEq for LeagueTable {
    fn eq(&self, other: &Self) -> bool {
        // The index is a lookup cache; only the rows carry state.
        self.rows == other.rows
    }
}

impl Eq for LeagueTable {}

impl LeagueTable {
    /// Create a table with one zeroed row per team.
    #[must_use]
    pub fn new(teams: impl IntoIterator<Item = (TeamId, String)>) -> Self {
        let mut table = Self::default();
        for (team, name) in teams {
            table.index.insert(team, table.rows.len());
            table.rows.push(TableRow::new(team, name));
        }
        table
    }

    fn row_mut(&mut self, team: TeamId) -> Option<&mut TableRow> {
        let idx = self.rebuild_index_if_needed(team)?;
        self.rows.get_mut(idx)
    }

    /// The index is skipped during deserialization; rebuild lazily.
    fn rebuild_index_if_needed(&mut self, team: TeamId) -> Option<usize> {
        if self.index.len() != self.rows.len() {
            self.index = self
                .rows
                .iter()
                .enumerate()
                .map(|(i, r)| (r.team, i))
                .collect();
        }
        self.index.get(&team).copied()
    }

    /// Record a completed series between two table teams.
    ///
    /// Unknown team IDs are ignored - a table only ever tracks its own
    /// competition.
    pub fn record(&mut self, team_a: TeamId, team_b: TeamId, result: &SeriesResult, points: PointScheme) {
        if let Some(row) = self.row_mut(team_a) {
            row.played += 1;
            row.sp_for += result.wins_a;
            row.sp_against += result.wins_b;
            match result.outcome {
                SeriesOutcome::TeamA => {
                    row.wins += 1;
                    row.points += points.win;
                }
                SeriesOutcome::TeamB => row.losses += 1,
                SeriesOutcome::Draw => {
                    row.draws += 1;
                    row.points += points.draw;
                }
            }
        }

        if let Some(row) = self.row_mut(team_b) {
            row.played += 1;
            row.sp_for += result.wins_b;
            row.sp_against += result.wins_a;
            match result.outcome {
                SeriesOutcome::TeamB => {
                    row.wins += 1;
                    row.points += points.win;
                }
                SeriesOutcome::TeamA => row.losses += 1,
                SeriesOutcome::Draw => {
                    row.draws += 1;
                    row.points += points.draw;
                }
            }
        }
    }

    /// Rows in registration order.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Domestic standings order: points, then SP difference, stable.
    #[must_use]
    pub fn sorted_standings(&self) -> Vec<&TableRow> {
        let mut rows: Vec<&TableRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.sp_diff().cmp(&a.sp_diff()))
        });
        rows
    }

    /// Conference standings order: points, SP difference, SP for, name.
    #[must_use]
    pub fn sorted_conference(&self) -> Vec<&TableRow> {
        let mut rows: Vec<&TableRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.sp_diff().cmp(&a.sp_diff()))
                .then_with(|| b.sp_for.cmp(&a.sp_for))
                .then_with(|| a.name.cmp(&b.name))
        });
        rows
    }
}
