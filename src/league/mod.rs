//! Domestic league play: fixtures, standings, regional tiers, and the
//! stepwise season driver.

pub mod fixtures;
pub mod season;
pub mod table;
pub mod tiers;

pub use fixtures::round_robin_rounds;
pub use season::{DayReport, LeagueState, PlayedMatch, TierState};
pub use table::{LeagueTable, PointScheme, TableRow, CONFERENCE_POINTS, LEAGUE_POINTS};
pub use tiers::{build_regional_leagues, split_into_tiers, tier_count};
