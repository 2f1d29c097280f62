//! Roster ingestion records.
//!
//! External collaborators supply team and fighter stubs plus the ability
//! catalog as structured records; the transport (files, network, embedded
//! data) is out of scope. These types are plain serde targets.

use serde::{Deserialize, Serialize};

use crate::abilities::Ability;
use crate::core::{FighterId, Race, Region, Role, TeamId};

/// A fighter before stats and abilities are rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterStub {
    pub id: FighterId,
    pub name: String,
    pub race: Race,
    pub role: Role,
}

/// A team before its fighters are built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStub {
    pub id: TeamId,
    pub name: String,
    pub region: Region,
    pub fighters: Vec<FighterStub>,
}

/// Everything needed to start a new game: domestic teams, the ability
/// catalog, and the elite-conference roster.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RosterData {
    #[serde(default)]
    pub teams: Vec<TeamStub>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub elite_teams: Vec<TeamStub>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_deserialization() {
        let json = r#"{
            "id": 10,
            "name": "Chrome Fangs",
            "region": "CyberpunkUnderground",
            "fighters": [
                { "id": 1, "name": "Vex", "race": "Feline", "role": "DPS" },
                { "id": 2, "name": "Bulwark", "race": "Ursine", "role": "Tank" },
                { "id": 3, "name": "Patch", "race": "Canine", "role": "Support" }
            ]
        }"#;

        let stub: TeamStub = serde_json::from_str(json).unwrap();
        assert_eq!(stub.id, TeamId::new(10));
        assert_eq!(stub.region, Region::CyberpunkUnderground);
        assert_eq!(stub.fighters.len(), 3);
        assert_eq!(stub.fighters[0].role, Role::Dps);
        assert_eq!(stub.fighters[1].race, Race::Ursine);
    }

    #[test]
    fn test_roster_data_defaults() {
        let data: RosterData = serde_json::from_str("{}").unwrap();
        assert!(data.teams.is_empty());
        assert!(data.abilities.is_empty());
        assert!(data.elite_teams.is_empty());
    }
}
