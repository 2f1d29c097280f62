//! Combat resolution: rounds, contested rolls, targeting, cover, and
//! best-of-N series.

pub mod contest;
pub mod log;
pub mod policy;
pub mod round;
pub mod series;
pub mod targeting;

pub use contest::{resolve_contest, AttackerProfile};
pub use log::MatchLog;
pub use policy::{choose_ability, ActionRule, DEFAULT_POLICY};
pub use round::{simulate_round, RoundResult, Side};
pub use series::{
    apply_series_fatigue, play_series, progress_injuries, recover_between_series, SeriesFormat,
    SeriesOutcome, SeriesResult,
};
pub use targeting::{find_covering_tank, select_targets};
