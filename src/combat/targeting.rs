//! Target selection and cover.
//!
//! Targeting is pure: given the two sides, it names the fighters an
//! ability resolves against. Damage targeting focuses fire on the
//! lowest-SP live enemies; ties keep lineup order. Projectiles aimed at
//! an enemy can be intercepted by an adjacent Tank that has not yet
//! covered this round.

use super::round::Side;
use crate::abilities::TargetKind;
use crate::core::Role;
use crate::roster::Fighter;

/// Indices of live fighters on a side, in lineup order.
#[must_use]
pub fn live_indices(side: &[&mut Fighter]) -> Vec<usize> {
    side.iter()
        .enumerate()
        .filter(|(_, f)| f.is_alive())
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the `count` lowest-SP live fighters on a side.
///
/// Uses a stable sort so SP ties resolve in lineup order.
#[must_use]
pub fn lowest_sp_live(side: &[&mut Fighter], count: usize) -> Vec<usize> {
    let mut live = live_indices(side);
    live.sort_by_key(|&i| side[i].current_sp);
    live.truncate(count);
    live
}

/// Resolve an ability's targets.
///
/// Returns `(side, index)` pairs; an empty result means the action is a
/// logged no-op.
#[must_use]
pub fn select_targets(
    kind: TargetKind,
    attacker_side: Side,
    attacker_idx: usize,
    side_a: &[&mut Fighter],
    side_b: &[&mut Fighter],
) -> Vec<(Side, usize)> {
    let (allies, enemies, enemy_side) = match attacker_side {
        Side::A => (side_a, side_b, Side::B),
        Side::B => (side_b, side_a, Side::A),
    };

    match kind {
        TargetKind::SelfOnly => vec![(attacker_side, attacker_idx)],
        TargetKind::Single => lowest_sp_live(enemies, 1)
            .into_iter()
            .map(|i| (enemy_side, i))
            .collect(),
        TargetKind::Aoe2 => lowest_sp_live(enemies, 2)
            .into_iter()
            .map(|i| (enemy_side, i))
            .collect(),
        TargetKind::AoeAllEnemies => live_indices(enemies)
            .into_iter()
            .map(|i| (enemy_side, i))
            .collect(),
        TargetKind::AoeAllAllies | TargetKind::AoeSelfAllies => live_indices(allies)
            .into_iter()
            .map(|i| (attacker_side, i))
            .collect(),
    }
}

/// Find a Tank able to intercept a projectile aimed at `target_idx`.
///
/// The Tank must be on the target's own side, live, adjacent to the
/// target's position, not the target itself, and must not have covered
/// yet this round. The caller consumes the cover use on a redirect.
#[must_use]
pub fn find_covering_tank(side: &[&mut Fighter], target_idx: usize) -> Option<usize> {
    let target_position = side[target_idx].position;
    side.iter().enumerate().position(|(i, f)| {
        i != target_idx
            && f.role == Role::Tank
            && f.is_alive()
            && !f.cover_used_this_round
            && f.position.is_adjacent(target_position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FighterId, Position, Race, Region};
    use crate::roster::{role_stamina, RoleTemplate};
    use smallvec::SmallVec;

    fn fighter(id: u32, role: Role, position: Position, sp: i32) -> Fighter {
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
            max_sp: template.base_sp.max(sp),
            current_sp: sp,
            stamina: role_stamina(role),
            fatigue: 0,
            injury: None,
            abilities: SmallVec::new(),
            buffs: Vec::new(),
            debuffs: Vec::new(),
            position,
            played_this_match: false,
            was_kod_this_match: false,
            cover_used_this_round: false,
        }
    }

    // Helper to view a Vec<Fighter> as &[&mut Fighter] for the API.
    fn as_refs(fighters: &mut [Fighter]) -> Vec<&mut Fighter> {
        fighters.iter_mut().collect()
    }

    #[test]
    fn test_single_targets_lowest_sp() {
        let mut enemies = vec![
            fighter(1, Role::Tank, Position::Left, 4),
            fighter(2, Role::Dps, Position::Center, 2),
            fighter(3, Role::Support, Position::Right, 3),
        ];
        let mut allies = vec![fighter(4, Role::Dps, Position::Left, 3)];

        let allies_refs = as_refs(&mut allies);
        let enemies_refs = as_refs(&mut enemies);

        let targets =
            select_targets(TargetKind::Single, Side::A, 0, &allies_refs, &enemies_refs);
        assert_eq!(targets, vec![(Side::B, 1)]);
    }

    #[test]
    fn test_single_ties_keep_lineup_order() {
        let mut enemies = vec![
            fighter(1, Role::Tank, Position::Left, 2),
            fighter(2, Role::Dps, Position::Center, 2),
        ];
        let mut allies = vec![fighter(4, Role::Dps, Position::Left, 3)];

        let allies_refs = as_refs(&mut allies);
        let enemies_refs = as_refs(&mut enemies);

        let targets =
            select_targets(TargetKind::Single, Side::A, 0, &allies_refs, &enemies_refs);
        assert_eq!(targets, vec![(Side::B, 0)]);
    }

    #[test]
    fn test_aoe2_skips_downed() {
        let mut enemies = vec![
            fighter(1, Role::Tank, Position::Left, 0),
            fighter(2, Role::Dps, Position::Center, 3),
            fighter(3, Role::Support, Position::Right, 1),
        ];
        let mut allies = vec![fighter(4, Role::Dps, Position::Left, 3)];

        let allies_refs = as_refs(&mut allies);
        let enemies_refs = as_refs(&mut enemies);

        let targets = select_targets(TargetKind::Aoe2, Side::A, 0, &allies_refs, &enemies_refs);
        assert_eq!(targets, vec![(Side::B, 2), (Side::B, 1)]);
    }

    #[test]
    fn test_ally_kinds_hit_all_live_allies() {
        let mut allies = vec![
            fighter(1, Role::Tank, Position::Left, 4),
            fighter(2, Role::Dps, Position::Center, 0),
            fighter(3, Role::Support, Position::Right, 2),
        ];
        let mut enemies = vec![fighter(4, Role::Dps, Position::Left, 3)];

        let allies_refs = as_refs(&mut allies);
        let enemies_refs = as_refs(&mut enemies);

        for kind in [TargetKind::AoeAllAllies, TargetKind::AoeSelfAllies] {
            let targets = select_targets(kind, Side::A, 2, &allies_refs, &enemies_refs);
            assert_eq!(targets, vec![(Side::A, 0), (Side::A, 2)]);
        }
    }

    #[test]
    fn test_self_only() {
        let mut allies = vec![fighter(1, Role::Support, Position::Right, 1)];
        let mut enemies = vec![fighter(2, Role::Dps, Position::Left, 3)];

        let allies_refs = as_refs(&mut allies);
        let enemies_refs = as_refs(&mut enemies);

        let targets =
            select_targets(TargetKind::SelfOnly, Side::A, 0, &allies_refs, &enemies_refs);
        assert_eq!(targets, vec![(Side::A, 0)]);
    }

    #[test]
    fn test_no_live_enemies_yields_empty() {
        let mut enemies = vec![fighter(1, Role::Tank, Position::Left, 0)];
        let mut allies = vec![fighter(2, Role::Dps, Position::Left, 3)];

        let allies_refs = as_refs(&mut allies);
        let enemies_refs = as_refs(&mut enemies);

        let targets =
            select_targets(TargetKind::Single, Side::A, 0, &allies_refs, &enemies_refs);
        assert!(targets.is_empty());
    }

    #[test]
    fn test_cover_requires_adjacency() {
        let mut defenders = vec![
            fighter(1, Role::Tank, Position::Left, 4),
            fighter(2, Role::Dps, Position::Center, 3),
            fighter(3, Role::Support, Position::Right, 3),
        ];
        let refs = as_refs(&mut defenders);

        // Tank at L is adjacent to C but not to R.
        assert_eq!(find_covering_tank(&refs, 1), Some(0));
        assert_eq!(find_covering_tank(&refs, 2), None);
    }

    #[test]
    fn test_cover_skips_spent_or_downed_tank() {
        let mut defenders = vec![
            fighter(1, Role::Tank, Position::Left, 4),
            fighter(2, Role::Dps, Position::Center, 3),
        ];
        defenders[0].cover_used_this_round = true;
        {
            let refs = as_refs(&mut defenders);
            assert_eq!(find_covering_tank(&refs, 1), None);
        }

        defenders[0].cover_used_this_round = false;
        defenders[0].current_sp = 0;
        let refs = as_refs(&mut defenders);
        assert_eq!(find_covering_tank(&refs, 1), None);
    }

    #[test]
    fn test_cover_never_redirects_to_target_itself() {
        let mut defenders = vec![
            fighter(1, Role::Tank, Position::Center, 4),
            fighter(2, Role::Dps, Position::Left, 3),
        ];
        let refs = as_refs(&mut defenders);
        // The tank is the target; nobody else qualifies.
        assert_eq!(find_covering_tank(&refs, 0), None);
    }
}
