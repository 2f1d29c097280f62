//! The continental tournament (MCL): qualification slots driven by
//! regional coefficients, two conference round-robins, wildcards,
//! semifinals, and a grand final, advanced step by step.

pub mod coefficients;
pub mod qualifiers;
pub mod result;
pub mod season;

pub use coefficients::{
    default_slots, history_window, seasonal_scores, slots_for_season, CoefficientHistory,
    ALLOCATION_PATTERN, HISTORY_DEPTH,
};
pub use qualifiers::{clone_for_tournament, pick_qualifiers};
pub use result::{MclSeasonResult, SemifinalRound, SeriesRecord, WildcardRound};
pub use season::{MclState, StepReport};
