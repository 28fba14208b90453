//! Repository port for raw creature records
//!
//! This is the storage collaborator behind the `PersistedCreatures` adapter.
//! It knows nothing about domain creatures, only `CreatureEntity` records.

use anyhow::Result;
use uuid::Uuid;

use super::CreatureEntity;

pub trait CreatureRepository: Send + Sync {
    /// Insert a record or replace the one with the same id
    fn save(&self, record: CreatureEntity) -> Result<()>;

    /// Candidate records for an id; callers must check for an exact match
    fn find_by_id(&self, id: Uuid) -> Result<Vec<CreatureEntity>>;

    /// List all records
    fn find_all(&self) -> Result<Vec<CreatureEntity>>;

    /// Delete a record, returning whether one was removed
    fn delete(&self, id: Uuid) -> Result<bool>;
}
