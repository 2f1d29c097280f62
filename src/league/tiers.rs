//! Regional tier assignment.
//!
//! Teams group by region, and each region splits into one to four tiers
//! sized as evenly as possible. Earlier tiers absorb any remainder, so a
//! 17-team region splits 9/8 rather than 8/9.

use rustc_hash::FxHashMap;

use crate::core::{Region, TeamId};
use crate::roster::Team;

/// Tiers for a region: clamp(N / 8, 1, 4).
#[must_use]
pub fn tier_count(team_count: usize) -> usize {
    (team_count / 8).clamp(1, 4)
}

/// Split a region's teams into tiers by ceiling division: each tier
/// takes `ceil(remaining / tiers_left)`.
#[must_use]
pub fn split_into_tiers(teams: Vec<TeamId>, tiers: usize) -> Vec<Vec<TeamId>> {
    assert!(tiers >= 1, "at least one tier");

    let total = teams.len();
    let mut result = Vec::with_capacity(tiers);
    let mut taken = 0;
    let mut iter = teams.into_iter();

    for tier in 0..tiers {
        let remaining = total - taken;
        let size = remaining.div_ceil(tiers - tier);
        result.push(iter.by_ref().take(size).collect());
        taken += size;
    }

    result
}

/// Group teams by region and split each region into tiers.
///
/// Regions keep their declaration order; teams keep roster order within
/// each region.
#[must_use]
pub fn build_regional_leagues(teams: &[Team]) -> Vec<(Region, Vec<Vec<TeamId>>)> {
    let mut by_region: FxHashMap<Region, Vec<TeamId>> = FxHashMap::default();
    for team in teams {
        by_region.entry(team.region).or_default().push(team.id);
    }

    Region::ALL
        .into_iter()
        .filter_map(|region| {
            let members = by_region.remove(&region)?;
            let tiers = tier_count(members.len());
            Some((region, split_into_tiers(members, tiers)))
        })
        .collect()
}
