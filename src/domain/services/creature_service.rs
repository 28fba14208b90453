//! Creature Service - Domain service in front of the creature store
//!
//! Delegates every call to a [`Creatures`] implementation. Callers depend on
//! this service rather than on a concrete storage adapter.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::Creatures;
use crate::domain::entities::Creature;
use crate::domain::errors::CreaturesError;
use crate::domain::value_objects::CreatureId;

#[derive(Clone)]
pub struct CreatureService {
    creatures: Arc<dyn Creatures>,
}

impl CreatureService {
    pub fn new(creatures: Arc<dyn Creatures>) -> Self {
        Self { creatures }
    }

    #[instrument(skip(self, creature), fields(creature_id = %creature.id()))]
    pub fn save(&self, creature: &Creature) -> Result<(), CreaturesError> {
        debug!("Saving creature");
        self.creatures.save(creature)
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: CreatureId) -> Result<Creature, CreaturesError> {
        debug!(creature_id = %id, "Fetching creature");
        self.creatures.find(id)
    }

    #[instrument(skip(self))]
    pub fn find_all(&self) -> Result<Vec<Creature>, CreaturesError> {
        self.creatures.find_all()
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: CreatureId) -> Result<(), CreaturesError> {
        debug!(creature_id = %id, "Deleting creature");
        self.creatures.delete(id)
    }
}
