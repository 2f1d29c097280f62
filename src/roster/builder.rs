//! Roster generation: stubs in, fully-statted fighters and teams out.
//!
//! Stats come from the role template plus race modifiers, floored at 1.
//! Each fighter learns three abilities sampled without replacement from
//! its eligible pool (gracefully fewer when the pool is small), and a
//! synthesized basic strike is always appended as the guaranteed
//! fallback action.

use smallvec::SmallVec;

use super::fighter::Fighter;
use super::stubs::{FighterStub, TeamStub};
use super::team::Team;
use super::templates::{role_stamina, RoleTemplate};
use crate::abilities::{Ability, AbilityRegistry, RangeType, RollType, TargetKind};
use crate::core::{AbilityId, Position, Region, Role, RosterError, SimRng};

/// ID offset for synthesized basic strikes, one per role, registered
/// alongside the catalog. Catalog data stays well below this range.
const BASIC_STRIKE_BASE: u32 = 0xFFFF_FF00;

/// The guaranteed fallback ability for a role.
///
/// Single-target, 1 SP on hit, attack-vs-defense; DPS throw theirs,
/// everyone else swings close.
#[must_use]
pub fn basic_strike(role: Role) -> Ability {
    let range = match role {
        Role::Dps => RangeType::Projectile,
        Role::Tank | Role::Support => RangeType::Close,
    };
    Ability::new(
        basic_strike_id(role),
        "Strike",
        role,
        RollType::AttackVsDefense,
        range,
        TargetKind::Single,
    )
    .with_sp_on_hit(1)
}

/// The reserved ID of a role's basic strike.
#[must_use]
pub const fn basic_strike_id(role: Role) -> AbilityId {
    let offset = match role {
        Role::Tank => 0,
        Role::Dps => 1,
        Role::Support => 2,
    };
    AbilityId::new(BASIC_STRIKE_BASE + offset)
}

/// Register the three basic strikes into a registry built from catalog
/// data. Call once after `AbilityRegistry::from_catalog`.
pub fn register_basic_strikes(registry: &mut AbilityRegistry) {
    for role in Role::ALL {
        registry.register(basic_strike(role));
    }
}

/// Build one fighter from its stub.
///
/// No side effects beyond construction: the RNG draw for the ability
/// sample is the only shared state touched.
#[must_use]
pub fn build_fighter(
    stub: &FighterStub,
    region: Region,
    registry: &AbilityRegistry,
    rng: &mut SimRng,
) -> Fighter {
    let template = RoleTemplate::of(stub.role);
    let (atk_mod, def_mod, spd_mod) = stub.race.modifiers();

    let attack = (template.attack + atk_mod).max(1);
    let defense = (template.defense + def_mod).max(1);
    let speed = (template.speed + spd_mod).max(1);
    let max_sp = template.base_sp;

    let pool: Vec<AbilityId> = {
        let mut ids: Vec<AbilityId> = registry
            .pool_for(stub.role, stub.race, region)
            .map(|a| a.id)
            .filter(|id| *id != basic_strike_id(stub.role))
            .collect();
        // FxHashMap iteration order is arbitrary; sort so the sample is
        // a pure function of the RNG sequence.
        ids.sort_unstable();
        ids
    };

    let mut abilities: SmallVec<[AbilityId; 4]> =
        rng.sample_without_replacement(&pool, 3).into();
    abilities.push(basic_strike_id(stub.role));

    Fighter {
        id: stub.id,
        name: stub.name.clone(),
        race: stub.race,
        role: stub.role,
        region,
        attack,
        defense,
        speed,
        max_sp,
        current_sp: max_sp,
        stamina: role_stamina(stub.role),
        fatigue: 0,
        injury: None,
        abilities,
        buffs: Vec::new(),
        debuffs: Vec::new(),
        position: Position::Center,
        played_this_match: false,
        was_kod_this_match: false,
        cover_used_this_round: false,
    }
}

/// Build a team from its stub, failing fast on malformed data.
pub fn build_team(
    stub: &TeamStub,
    registry: &AbilityRegistry,
    rng: &mut SimRng,
) -> Result<Team, RosterError> {
    if stub.fighters.is_empty() {
        return Err(RosterError::EmptyTeam {
            team: stub.id,
            name: stub.name.clone(),
        });
    }

    for (i, fighter) in stub.fighters.iter().enumerate() {
        if stub.fighters[..i].iter().any(|other| other.id == fighter.id) {
            return Err(RosterError::DuplicateFighter {
                team: stub.id,
                name: stub.name.clone(),
                fighter: fighter.id.raw(),
            });
        }
    }

    let fighters = stub
        .fighters
        .iter()
        .map(|f| build_fighter(f, stub.region, registry, rng))
        .collect();

    Ok(Team {
        id: stub.id,
        name: stub.name.clone(),
        region: stub.region,
        fighters,
    })
}
