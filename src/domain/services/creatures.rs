//! Creatures port - The storage contract the domain relies on

use crate::domain::entities::Creature;
use crate::domain::errors::CreaturesError;
use crate::domain::value_objects::CreatureId;

/// Collection of all known creatures.
///
/// Implementations live in the infrastructure layer; the domain only sees
/// this trait.
pub trait Creatures: Send + Sync {
    /// Store a creature, replacing any earlier version with the same id
    fn save(&self, creature: &Creature) -> Result<(), CreaturesError>;

    /// Get a creature by ID, failing with `NotFound` when it does not exist
    fn find(&self, id: CreatureId) -> Result<Creature, CreaturesError>;

    /// List all creatures
    fn find_all(&self) -> Result<Vec<Creature>, CreaturesError>;

    /// Remove a creature, failing with `NotFound` when it does not exist
    fn delete(&self, id: CreatureId) -> Result<(), CreaturesError>;
}
