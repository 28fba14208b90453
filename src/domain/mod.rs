//! Domain layer - Core business logic with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: Creature and the Fightable capability
//! - Value Objects: ids, creature/speed types, armor class, hit points
//! - Errors: the creature lookup failure
//! - Domain Services: the Creatures storage contract and CreatureService

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
