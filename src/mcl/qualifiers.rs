//! Continental qualification.
//!
//! Each pool region sends its top N teams, N from the slot allocation.
//! Ordering within a region is alphabetical by default or follows the
//! supplied domestic standings; teams the standings do not mention are
//! appended in default order. Every entrant is a deep clone, reset to
//! full fitness, so the domestic rosters are never touched.

use rustc_hash::FxHashMap;

use crate::core::{Region, TeamId};
use crate::roster::Team;

/// Clone a team for tournament play: fresh fatigue, no injuries, full
/// SP, no lingering statuses or flags.
#[must_use]
pub fn clone_for_tournament(team: &Team) -> Team {
    let mut clone = team.clone();
    clone.reset_for_tournament();
    clone
}

/// Pick the qualifying teams for the continental conference.
///
/// `slots` maps each pool region to its team count; `standings`, when
/// provided, orders a region's candidates by domestic results.
#[must_use]
pub fn pick_qualifiers(
    teams: &[Team],
    slots: &FxHashMap<Region, usize>,
    standings: Option<&FxHashMap<Region, Vec<TeamId>>>,
) -> Vec<Team> {
    let mut qualifiers = Vec::new();

    for region in Region::POOL {
        let count = slots.get(&region).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }

        // Default order: alphabetical by team name.
        let mut pool: Vec<&Team> = teams.iter().filter(|t| t.region == region).collect();
        pool.sort_by(|a, b| a.name.cmp(&b.name));

        // Domestic standings override: listed teams first in standings
        // order, the rest keep their default order.
        if let Some(order) = standings.and_then(|s| s.get(&region)) {
            let mut ranked: Vec<&Team> = order
                .iter()
                .filter_map(|id| pool.iter().find(|t| t.id == *id).copied())
                .collect();
            let unranked: Vec<&Team> = pool
                .iter()
                .filter(|t| !order.contains(&t.id))
                .copied()
                .collect();
            ranked.extend(unranked);
            pool = ranked;
        }

        qualifiers.extend(pool.into_iter().take(count).map(clone_for_tournament));
    }

    qualifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Fighter, Injury, InjurySeverity};
    use crate::core::{FighterId, Position, Race, Role, Stat};
    use crate::roster::{role_stamina, RoleTemplate};
    use smallvec::SmallVec;

    fn fighter(id: u32) -> Fighter {
        let template = RoleTemplate::of(Role::Tank);
        Fighter {
            id: FighterId::new(id),
            name: format!("F{id}"),
            race: Race::Canine,
            role: Role::Tank,
            region: Region::DieselpunkCold,
            attack: template.attack,
            defense: template.defense,
            speed: template.speed,
            max_sp: template.base_sp,
            current_sp: template.base_sp,
            stamina: role_stamina(Role::Tank),
            fatigue: 0,
            injury: None,
            abilities: SmallVec::new(),
            buffs: Vec::new(),
            debuffs: Vec::new(),
            position: Position::Center,
            played_this_match: false,
            was_kod_this_match: false,
            cover_used_this_round: false,
        }
    }

    fn team(id: u32, name: &str, region: Region) -> Team {
        Team {
            id: TeamId::new(id),
            name: name.to_string(),
            region,
            fighters: vec![fighter(id * 10)],
        }
    }

    #[test]
    fn test_alphabetical_default_order() {
        let teams = vec![
            team(1, "Zeta", Region::DieselpunkCold),
            team(2, "Alpha", Region::DieselpunkCold),
            team(3, "Mid", Region::DieselpunkCold),
        ];
        let mut slots = FxHashMap::default();
        slots.insert(Region::DieselpunkCold, 2);

        let picked = pick_qualifiers(&teams, &slots, None);
        let names: Vec<_> = picked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid"]);
    }

    #[test]
    fn test_standings_order_overrides() {
        let teams = vec![
            team(1, "Zeta", Region::DieselpunkCold),
            team(2, "Alpha", Region::DieselpunkCold),
            team(3, "Mid", Region::DieselpunkCold),
        ];
        let mut slots = FxHashMap::default();
        slots.insert(Region::DieselpunkCold, 2);

        let mut standings = FxHashMap::default();
        standings.insert(Region::DieselpunkCold, vec![TeamId::new(1), TeamId::new(3)]);

        let picked = pick_qualifiers(&teams, &slots, Some(&standings));
        let names: Vec<_> = picked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Mid"]);
    }

    #[test]
    fn test_unlisted_teams_appended_in_default_order() {
        let teams = vec![
            team(1, "Zeta", Region::DieselpunkCold),
            team(2, "Alpha", Region::DieselpunkCold),
            team(3, "Mid", Region::DieselpunkCold),
        ];
        let mut slots = FxHashMap::default();
        slots.insert(Region::DieselpunkCold, 3);

        // Standings only mention Mid.
        let mut standings = FxHashMap::default();
        standings.insert(Region::DieselpunkCold, vec![TeamId::new(3)]);

        let picked = pick_qualifiers(&teams, &slots, Some(&standings));
        let names: Vec<_> = picked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_elite_region_never_selected() {
        let teams = vec![
            team(1, "Neon Crown", Region::LedPunkElite),
            team(2, "Alpha", Region::DieselpunkCold),
        ];
        let mut slots = FxHashMap::default();
        slots.insert(Region::DieselpunkCold, 4);

        let picked = pick_qualifiers(&teams, &slots, None);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "Alpha");
    }

    #[test]
    fn test_entrants_are_reset_clones() {
        let mut source = team(1, "Alpha", Region::DieselpunkCold);
        source.fighters[0].fatigue = 8;
        source.fighters[0].injury = Some(Injury::new(InjurySeverity::Major, 5));
        source.fighters[0].current_sp = 0;
        source.fighters[0].buffs.push(crate::roster::StatusEffect {
            stat: Stat::Attack,
            amount: 1,
            duration: 2,
        });

        let mut slots = FxHashMap::default();
        slots.insert(Region::DieselpunkCold, 1);
        let teams = vec![source];

        let picked = pick_qualifiers(&teams, &slots, None);
        let entrant = &picked[0].fighters[0];
        assert_eq!(entrant.fatigue, 0);
        assert!(entrant.injury.is_none());
        assert_eq!(entrant.current_sp, entrant.max_sp);
        assert!(entrant.buffs.is_empty());

        // The domestic roster kept its wear.
        assert_eq!(teams[0].fighters[0].fatigue, 8);
        assert!(teams[0].fighters[0].injury.is_some());
    }
}
