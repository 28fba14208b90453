//! Persisted shape of a creature

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage record for a creature.
///
/// Only the identity is persisted. Type, armor class, hit points and speeds
/// are not part of the record, so a stored creature comes back with its id
/// and default attributes. Full round-tripping needs extra columns here and
/// in the adapter mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureEntity {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CreatureEntity {
    /// Build a record for `id`, generating a fresh one when none is given
    pub fn new(id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            created_at: now,
            updated_at: now,
        }
    }

    /// Carry over the creation time of the record this one replaces
    pub fn replacing(mut self, previous: &CreatureEntity) -> Self {
        self.created_at = previous.created_at;
        self
    }
}
