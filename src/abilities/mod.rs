//! Ability system: immutable definitions and the catalog registry.
//!
//! Follows a definition/instance split: `Ability` is shared reference
//! data, while a fighter's learned abilities are just `AbilityId`s
//! resolved against the registry at combat time.

pub mod definition;
pub mod registry;

pub use definition::{Ability, AbilityTag, RangeType, RollType, StatusTemplate, TargetKind};
pub use registry::AbilityRegistry;
