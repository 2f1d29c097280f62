//! Roster configuration errors.
//!
//! Malformed roster data fails fast at build time with a descriptive
//! error. Runtime play never surfaces errors this way: insufficient
//! participants and impossible actions become log-line notices instead.

use thiserror::Error;

use super::ids::TeamId;

/// Errors raised while building fighters and teams from stub data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A team stub arrived with no fighters at all.
    #[error("team {team} ({name}) has an empty fighter list")]
    EmptyTeam { team: TeamId, name: String },

    /// Two fighters in the same team share an ID.
    #[error("team {team} ({name}) contains duplicate fighter id {fighter}")]
    DuplicateFighter {
        team: TeamId,
        name: String,
        fighter: u32,
    },
}
