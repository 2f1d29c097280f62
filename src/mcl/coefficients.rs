//! Regional coefficients and qualification slots.
//!
//! Each season a region earns points from its teams' continental
//! results; the seasonal score (points per participating team) is
//! prepended to the region's coefficient history, which keeps at most
//! the three most recent seasons. Slot allocation ranks the four pool
//! regions by their recent history and hands out the fixed 4/3/3/2
//! pattern in rank order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Region;

/// Qualification slots handed to the ranked pool regions, best first.
pub const ALLOCATION_PATTERN: [usize; 4] = [4, 3, 3, 2];

/// Maximum seasons of history a region keeps.
pub const HISTORY_DEPTH: usize = 3;

/// Per-region coefficient history, newest first, at most
/// `HISTORY_DEPTH` entries. The one piece of tournament state that
/// survives between seasons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientHistory {
    scores: FxHashMap<Region, Vec<f64>>,
}

impl CoefficientHistory {
    /// Empty history for every region.
    #[must_use]
    pub fn new() -> Self {
        let mut scores = FxHashMap::default();
        for region in Region::ALL {
            scores.insert(region, Vec::new());
        }
        Self { scores }
    }

    /// A region's recorded scores, newest first.
    #[must_use]
    pub fn scores_for(&self, region: Region) -> &[f64] {
        self.scores.get(&region).map_or(&[], Vec::as_slice)
    }

    /// Prepend this season's scores and truncate to the history depth.
    pub fn record_season(&mut self, seasonal: &FxHashMap<Region, f64>) {
        for region in Region::ALL {
            let entry = self.scores.entry(region).or_default();
            entry.insert(0, seasonal.get(&region).copied().unwrap_or(0.0));
            entry.truncate(HISTORY_DEPTH);
        }
    }

    /// Sum of the newest `window` entries for a region.
    #[must_use]
    pub fn window_sum(&self, region: Region, window: usize) -> f64 {
        self.scores_for(region).iter().take(window).sum()
    }
}

/// Season-one defaults before any history exists.
#[must_use]
pub fn default_slots() -> FxHashMap<Region, usize> {
    let mut slots = FxHashMap::default();
    slots.insert(Region::CyberpunkUnderground, 4);
    slots.insert(Region::DieselpunkCold, 3);
    slots.insert(Region::SteampunkDesert, 3);
    slots.insert(Region::SolarpunkForest, 2);
    slots
}

/// How many history entries a season's allocation may consult: one for
/// season two, two for season three, three from season four on.
#[must_use]
pub fn history_window(season_number: u32) -> usize {
    match season_number {
        0 | 1 => 0,
        2 => 1,
        3 => 2,
        _ => HISTORY_DEPTH,
    }
}

/// Compute the slot allocation for a season.
///
/// Season one always uses the fixed defaults. Later seasons rank the
/// pool regions by their history window sum, ties broken alphabetically
/// by region name, and assign `ALLOCATION_PATTERN` in rank order.
#[must_use]
pub fn slots_for_season(
    history: &CoefficientHistory,
    season_number: u32,
) -> FxHashMap<Region, usize> {
    if season_number <= 1 {
        return default_slots();
    }

    let window = history_window(season_number);
    let mut ranking: Vec<Region> = Region::POOL.to_vec();
    ranking.sort_by(|a, b| {
        let total_a = history.window_sum(*a, window);
        let total_b = history.window_sum(*b, window);
        total_b
            .total_cmp(&total_a)
            .then_with(|| a.name().cmp(b.name()))
    });

    ranking
        .into_iter()
        .zip(ALLOCATION_PATTERN)
        .collect()
}

/// Seasonal score per region: region points divided by the number of
/// that region's participating teams, zero when none took part.
#[must_use]
pub fn seasonal_scores(
    region_points: &FxHashMap<Region, i64>,
    team_counts: &FxHashMap<Region, usize>,
) -> FxHashMap<Region, f64> {
    let mut scores = FxHashMap::default();
    for region in Region::ALL {
        let points = region_points.get(&region).copied().unwrap_or(0);
        let teams = team_counts.get(&region).copied().unwrap_or(0);
        let score = if teams > 0 {
            points as f64 / teams as f64
        } else {
            0.0
        };
        scores.insert(region, score);
    }
    scores
}
