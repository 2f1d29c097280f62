//! Role base-stat templates.
//!
//! Every fighter starts from its role template; race modifiers shift the
//! result, and each derived stat is floored at 1.

use crate::core::Role;

/// Base stats for a role: attack, defense, speed, and starting SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleTemplate {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub base_sp: i32,
}

impl RoleTemplate {
    /// Template for a role.
    #[must_use]
    pub const fn of(role: Role) -> Self {
        match role {
            Role::Tank => Self {
                attack: 3,
                defense: 6,
                speed: 2,
                base_sp: 4,
            },
            Role::Dps => Self {
                attack: 6,
                defense: 3,
                speed: 4,
                base_sp: 3,
            },
            Role::Support => Self {
                attack: 3,
                defense: 3,
                speed: 6,
                base_sp: 3,
            },
        }
    }
}

/// Fatigue a role carries comfortably. Effective-stat penalties scale
/// against this baseline.
#[must_use]
pub const fn role_stamina(role: Role) -> i32 {
    match role {
        Role::Tank => 6,
        Role::Dps => 5,
        Role::Support => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        let tank = RoleTemplate::of(Role::Tank);
        assert_eq!((tank.attack, tank.defense, tank.speed, tank.base_sp), (3, 6, 2, 4));

        let dps = RoleTemplate::of(Role::Dps);
        assert_eq!((dps.attack, dps.defense, dps.speed, dps.base_sp), (6, 3, 4, 3));

        let support = RoleTemplate::of(Role::Support);
        assert_eq!(
            (support.attack, support.defense, support.speed, support.base_sp),
            (3, 3, 6, 3)
        );
    }

    #[test]
    fn test_stamina_baselines() {
        assert_eq!(role_stamina(Role::Tank), 6);
        assert_eq!(role_stamina(Role::Dps), 5);
        assert_eq!(role_stamina(Role::Support), 7);
    }
}
