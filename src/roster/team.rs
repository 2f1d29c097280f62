//! Teams and lineup selection.

use serde::{Deserialize, Serialize};

use super::fighter::Fighter;
use crate::core::{Region, Role, TeamId};

/// A team and its owned fighters.
///
/// Cloning a team is a full deep copy: fighters carry no references
/// back to the team, so tournament entrants can be cloned from domestic
/// rosters without any shared state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub region: Region,
    pub fighters: Vec<Fighter>,
}

impl Team {
    /// Indices of the fighters to field: the first available fighter of
    /// each role (Tank, DPS, Support), then any remaining available
    /// fighters in roster order, capped at three.
    ///
    /// Injured fighters sit out; a depleted roster fields fewer than
    /// three, and an empty selection means the team must forfeit.
    #[must_use]
    pub fn pick_lineup(&self) -> Vec<usize> {
        let mut lineup = Vec::with_capacity(3);

        for role in Role::ALL {
            let found = self
                .fighters
                .iter()
                .enumerate()
                .find(|(i, f)| f.role == role && f.is_available() && !lineup.contains(i));
            if let Some((i, _)) = found {
                lineup.push(i);
            }
        }

        // Fill any gaps with whoever is fit, in roster order.
        for (i, f) in self.fighters.iter().enumerate() {
            if lineup.len() >= 3 {
                break;
            }
            if f.is_available() && !lineup.contains(&i) {
                lineup.push(i);
            }
        }

        lineup.truncate(3);
        lineup
    }

    /// Mark a lineup as having played this match.
    pub fn mark_played(&mut self, lineup: &[usize]) {
        for &i in lineup {
            self.fighters[i].played_this_match = true;
        }
    }

    /// Reset the whole roster for tournament entry. Used on cloned
    /// entrants so domestic fatigue and injuries never carry over.
    pub fn reset_for_tournament(&mut self) {
        for fighter in &mut self.fighters {
            fighter.reset_for_tournament();
        }
    }
}

/// Borrow two distinct teams mutably out of one slice.
///
/// Returns `None` when either ID is missing or both IDs name the same
/// team. Schedulers use this to hand both sides of a match to the
/// series orchestrator without cloning.
#[must_use]
pub fn pair_by_ids(teams: &mut [Team], a: TeamId, b: TeamId) -> Option<(&mut Team, &mut Team)> {
    if a == b {
        return None;
    }
    let idx_a = teams.iter().position(|t| t.id == a)?;
    let idx_b = teams.iter().position(|t| t.id == b)?;

    if idx_a < idx_b {
        let (left, right) = teams.split_at_mut(idx_b);
        Some((&mut left[idx_a], &mut right[0]))
    } else {
        let (left, right) = teams.split_at_mut(idx_a);
        Some((&mut right[0], &mut left[idx_b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FighterId, Position, Race, Stat};
    use crate::roster::fighter::{Injury, InjurySeverity};
    use crate::roster::templates::{role_stamina, RoleTemplate};
    use smallvec::SmallVec;

    fn fighter(id: u32, role: Role) -> Fighter {
        let template = RoleTemplate::of(role);
        Fighter {
            id: FighterId::new(id),
            name: format!("F{id}"),
            race: Race::Canine,
            role,
            region: Region::DieselpunkCold,
            attack: template.attack,
            defense: template.defense,
            speed: template.speed,
            max_sp: template.base_sp,
            current_sp: template.base_sp,
            stamina: role_stamina(role),
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

    fn team(fighters: Vec<Fighter>) -> Team {
        Team {
            id: TeamId::new(1),
            name: "Test Team".to_string(),
            region: Region::DieselpunkCold,
            fighters,
        }
    }

    #[test]
    fn test_pick_lineup_one_per_role() {
        let t = team(vec![
            fighter(1, Role::Tank),
            fighter(2, Role::Dps),
            fighter(3, Role::Support),
            fighter(4, Role::Dps),
        ]);

        let lineup = t.pick_lineup();
        assert_eq!(lineup, vec![0, 1, 2]);
    }

    #[test]
    fn test_pick_lineup_skips_injured_and_fills() {
        let mut t = team(vec![
            fighter(1, Role::Tank),
            fighter(2, Role::Dps),
            fighter(3, Role::Support),
            fighter(4, Role::Dps),
        ]);
        t.fighters[1].injury = Some(Injury::new(InjurySeverity::Minor, 1));

        let lineup = t.pick_lineup();
        // Tank, Support by role; second DPS fills the gap.
        assert_eq!(lineup, vec![0, 2, 3]);
    }

    #[test]
    fn test_pick_lineup_fills_with_duplicates_roles() {
        let t = team(vec![
            fighter(1, Role::Tank),
            fighter(2, Role::Tank),
            fighter(3, Role::Tank),
        ]);
        let lineup = t.pick_lineup();
        assert_eq!(lineup, vec![0, 1, 2]);
    }

    #[test]
    fn test_pick_lineup_all_injured_is_empty() {
        let mut t = team(vec![fighter(1, Role::Tank), fighter(2, Role::Dps)]);
        for f in &mut t.fighters {
            f.injury = Some(Injury::new(InjurySeverity::Moderate, 2));
        }
        assert!(t.pick_lineup().is_empty());
    }

    #[test]
    fn test_mark_played() {
        let mut t = team(vec![
            fighter(1, Role::Tank),
            fighter(2, Role::Dps),
            fighter(3, Role::Support),
        ]);
        let lineup = t.pick_lineup();
        t.mark_played(&lineup);
        assert!(t.fighters.iter().all(|f| f.played_this_match));
    }

    #[test]
    fn test_pair_by_ids() {
        let mut teams = vec![
            Team {
                id: TeamId::new(1),
                name: "One".to_string(),
                region: Region::DieselpunkCold,
                fighters: Vec::new(),
            },
            Team {
                id: TeamId::new(2),
                name: "Two".to_string(),
                region: Region::DieselpunkCold,
                fighters: Vec::new(),
            },
        ];

        let (a, b) = pair_by_ids(&mut teams, TeamId::new(2), TeamId::new(1)).unwrap();
        assert_eq!(a.name, "Two");
        assert_eq!(b.name, "One");

        assert!(pair_by_ids(&mut teams, TeamId::new(1), TeamId::new(1)).is_none());
        assert!(pair_by_ids(&mut teams, TeamId::new(1), TeamId::new(9)).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut t = team(vec![fighter(1, Role::Tank)]);
        let mut clone = t.clone();
        clone.fighters[0].fatigue = 9;
        clone.fighters[0].buffs.push(crate::roster::StatusEffect {
            stat: Stat::Attack,
            amount: 1,
            duration: 1,
        });

        assert_eq!(t.fighters[0].fatigue, 0);
        assert!(t.fighters[0].buffs.is_empty());
        t.fighters[0].fatigue = 3;
        assert_eq!(clone.fighters[0].fatigue, 9);
    }
}
