//! Adapter implementing the domain `Creatures` port on top of a record store

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{CreatureEntity, CreatureRepository};
use crate::domain::entities::Creature;
use crate::domain::errors::CreaturesError;
use crate::domain::services::Creatures;
use crate::domain::value_objects::CreatureId;

/// Translates between domain creatures and `CreatureEntity` records.
///
/// Only the id survives the translation (see [`CreatureEntity`]); found
/// creatures carry the standard type and no other attributes.
pub struct PersistedCreatures<R: CreatureRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CreatureRepository + ?Sized> PersistedCreatures<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn to_record(creature: &Creature) -> CreatureEntity {
        CreatureEntity::new(Some(creature.id().into()))
    }

    fn to_domain(record: &CreatureEntity) -> Creature {
        Creature::new(CreatureId::from_uuid(record.id))
    }
}

impl<R: CreatureRepository + ?Sized> Creatures for PersistedCreatures<R> {
    #[instrument(skip(self, creature), fields(creature_id = %creature.id()))]
    fn save(&self, creature: &Creature) -> Result<(), CreaturesError> {
        self.repository.save(Self::to_record(creature))?;
        debug!("Persisted creature");
        Ok(())
    }

    #[instrument(skip(self))]
    fn find(&self, id: CreatureId) -> Result<Creature, CreaturesError> {
        let wanted = *id.as_uuid();
        let candidates = self.repository.find_by_id(wanted)?;
        let record = candidates
            .iter()
            .find(|record| record.id == wanted)
            .ok_or(CreaturesError::NotFound(id))?;
        Ok(Self::to_domain(record))
    }

    #[instrument(skip(self))]
    fn find_all(&self) -> Result<Vec<Creature>, CreaturesError> {
        let records = self.repository.find_all()?;
        debug!(count = records.len(), "Loaded creature records");
        Ok(records.iter().map(Self::to_domain).collect())
    }

    #[instrument(skip(self))]
    fn delete(&self, id: CreatureId) -> Result<(), CreaturesError> {
        if self.repository.delete(*id.as_uuid())? {
            Ok(())
        } else {
            warn!(creature_id = %id, "Delete requested for unknown creature");
            Err(CreaturesError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use uuid::Uuid;

    use super::*;
    use crate::domain::entities::STANDARD_CREATURE_TYPE;
    use crate::domain::value_objects::{CreatureType, HitPoints};
    use crate::infrastructure::persistence::InMemoryCreatureRepository;

    /// Answers every lookup with unrelated records, plus the real one if stored
    struct LooseRepository {
        inner: InMemoryCreatureRepository,
    }

    impl CreatureRepository for LooseRepository {
        fn save(&self, record: CreatureEntity) -> Result<()> {
            self.inner.save(record)
        }

        fn find_by_id(&self, id: Uuid) -> Result<Vec<CreatureEntity>> {
            let mut candidates = vec![CreatureEntity::new(None), CreatureEntity::new(None)];
            candidates.extend(self.inner.find_by_id(id)?);
            Ok(candidates)
        }

        fn find_all(&self) -> Result<Vec<CreatureEntity>> {
            self.inner.find_all()
        }

        fn delete(&self, id: Uuid) -> Result<bool> {
            self.inner.delete(id)
        }
    }

    struct BrokenRepository;

    impl CreatureRepository for BrokenRepository {
        fn save(&self, _record: CreatureEntity) -> Result<()> {
            anyhow::bail!("connection refused")
        }

        fn find_by_id(&self, _id: Uuid) -> Result<Vec<CreatureEntity>> {
            anyhow::bail!("connection refused")
        }

        fn find_all(&self) -> Result<Vec<CreatureEntity>> {
            anyhow::bail!("connection refused")
        }

        fn delete(&self, _id: Uuid) -> Result<bool> {
            anyhow::bail!("connection refused")
        }
    }

    fn in_memory() -> PersistedCreatures<InMemoryCreatureRepository> {
        PersistedCreatures::new(Arc::new(InMemoryCreatureRepository::new()))
    }

    #[test]
    fn test_save_then_find_round_trips_identity() {
        let creatures = in_memory();
        let mut creature = Creature::with_type(CreatureId::new(), CreatureType::Dragon);
        creature.hit_points = Some(HitPoints::init(200));

        creatures.save(&creature).unwrap();
        let found = creatures.find(creature.id()).unwrap();

        assert_eq!(found.id(), creature.id());
        // Attributes beyond the id are not persisted
        assert_eq!(found.creature_type, STANDARD_CREATURE_TYPE);
        assert_eq!(found.hit_points, None);
    }

    #[test]
    fn test_find_unknown_id_is_not_found() {
        let id = CreatureId::new();
        let err = in_memory().find(id).unwrap_err();
        assert!(matches!(err, CreaturesError::NotFound(missing) if missing == id));
        assert_eq!(err.to_string(), format!("no creature found with id: {}", id));
    }

    #[test]
    fn test_find_picks_exact_match_among_candidates() {
        let creatures = PersistedCreatures::new(Arc::new(LooseRepository {
            inner: InMemoryCreatureRepository::new(),
        }));
        let creature = Creature::new(CreatureId::new());

        assert!(creatures.find(creature.id()).is_err());

        creatures.save(&creature).unwrap();
        assert_eq!(creatures.find(creature.id()).unwrap().id(), creature.id());
    }

    #[test]
    fn test_find_all_and_delete() {
        let creatures = in_memory();
        let a = Creature::new(CreatureId::new());
        let b = Creature::new(CreatureId::new());
        creatures.save(&a).unwrap();
        creatures.save(&b).unwrap();
        assert_eq!(creatures.find_all().unwrap().len(), 2);

        creatures.delete(a.id()).unwrap();
        assert_eq!(creatures.delete(a.id()).unwrap_err().missing_id(), Some(a.id()));

        let remaining: Vec<_> = creatures
            .find_all()
            .unwrap()
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(remaining, vec![b.id()]);
    }

    #[test]
    fn test_repository_failures_pass_through() {
        let repository: Arc<dyn CreatureRepository> = Arc::new(BrokenRepository);
        let creatures = PersistedCreatures::new(repository);
        let creature = Creature::new(CreatureId::new());

        let err = creatures.save(&creature).unwrap_err();
        assert!(matches!(err, CreaturesError::Storage(_)));
        assert_eq!(err.to_string(), "connection refused");

        let err = creatures.find(creature.id()).unwrap_err();
        assert!(err.missing_id().is_none());
    }
}
