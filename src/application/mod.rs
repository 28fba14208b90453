//! Application layer - Entry points that assemble domain objects from inputs

pub mod creature_facade;
pub mod creature_util;

pub use creature_facade::{CreateCreatureRequest, CreatureFacade};
pub use creature_util::{challenge_rating, format_creature_info, same_creature, CreatureBuilder};
