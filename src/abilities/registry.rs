//! Ability registry for definition lookup.
//!
//! The `AbilityRegistry` stores every ability definition in the catalog.
//! It provides fast lookup by `AbilityId` and filtered iteration for
//! roster generation.

use rustc_hash::FxHashMap;

use super::definition::Ability;
use crate::core::{AbilityId, Race, Region, Role};

/// Registry of ability definitions.
///
/// ## Example
///
/// ```
/// use punk_league::abilities::{Ability, AbilityRegistry, RangeType, RollType, TargetKind};
/// use punk_league::core::{AbilityId, Role};
///
/// let mut registry = AbilityRegistry::new();
/// registry.register(
///     Ability::new(
///         AbilityId::new(1),
///         "Shield Slam",
///         Role::Tank,
///         RollType::AttackVsDefense,
///         RangeType::Close,
///         TargetKind::Single,
///     )
///     .with_sp_on_hit(1),
/// );
///
/// assert_eq!(registry.get(AbilityId::new(1)).unwrap().name, "Shield Slam");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    abilities: FxHashMap<AbilityId, Ability>,
}

impl AbilityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from catalog records.
    ///
    /// Panics if the catalog contains duplicate ability IDs.
    #[must_use]
    pub fn from_catalog(catalog: impl IntoIterator<Item = Ability>) -> Self {
        let mut registry = Self::new();
        for ability in catalog {
            registry.register(ability);
        }
        registry
    }

    /// Register an ability definition.
    ///
    /// Panics if an ability with the same ID already exists.
    pub fn register(&mut self, ability: Ability) {
        if self.abilities.contains_key(&ability.id) {
            panic!("Ability with ID {:?} already registered", ability.id);
        }
        self.abilities.insert(ability.id, ability);
    }

    /// Get an ability definition by ID.
    #[must_use]
    pub fn get(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities.get(&id)
    }

    /// Get an ability definition by ID, panicking if not found.
    ///
    /// Use when the ID came from a fighter built against this registry.
    #[must_use]
    pub fn get_unchecked(&self, id: AbilityId) -> &Ability {
        self.abilities.get(&id).expect("Ability not found in registry")
    }

    /// Check if an ability ID is registered.
    #[must_use]
    pub fn contains(&self, id: AbilityId) -> bool {
        self.abilities.contains_key(&id)
    }

    /// Get the number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterate over all ability definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }

    /// The learnable pool for a fighter: role matches, and the optional
    /// race/region allow-lists (when present) include the fighter.
    pub fn pool_for(
        &self,
        role: Role,
        race: Race,
        region: Region,
    ) -> impl Iterator<Item = &Ability> {
        self.abilities
            .values()
            .filter(move |a| a.learnable_by(role, race, region))
    }
}
