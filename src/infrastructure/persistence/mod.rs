//! Persistence adapters
//!
//! `PersistedCreatures` implements the domain `Creatures` port on top of any
//! `CreatureRepository`. Two repositories are provided: an in-memory map and
//! a JSON file.

mod creature_entity;
mod in_memory_repository;
mod json_file_repository;
mod persisted_creatures;
mod repository;

pub use creature_entity::CreatureEntity;
pub use in_memory_repository::InMemoryCreatureRepository;
pub use json_file_repository::JsonFileCreatureRepository;
pub use persisted_creatures::PersistedCreatures;
pub use repository::CreatureRepository;
