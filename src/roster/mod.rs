//! Roster generation: stubs plus the ability catalog become
//! fully-statted fighters and teams.

pub mod builder;
pub mod fighter;
pub mod stubs;
pub mod team;
pub mod templates;

pub use builder::{basic_strike, basic_strike_id, build_fighter, build_team, register_basic_strikes};
pub use fighter::{Fighter, Injury, InjurySeverity, StatusEffect};
pub use stubs::{FighterStub, RosterData, TeamStub};
pub use team::{pair_by_ids, Team};
pub use templates::{role_stamina, RoleTemplate};
