//! Creature Facade - Application entry point for building and storing creatures
//!
//! Assembles a fully populated [`Creature`] from plain inputs and hands it to
//! the [`CreatureService`].

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::domain::entities::{Creature, STANDARD_CREATURE_TYPE};
use crate::domain::errors::CreaturesError;
use crate::domain::services::CreatureService;
use crate::domain::value_objects::{
    ArmorClass, CreatureId, CreatureType, HitPoints, Speed, SpeedType,
};

/// Request to create a new creature
#[derive(Debug, Clone)]
pub struct CreateCreatureRequest {
    pub creature_type: CreatureType,
    pub walk_speed: Speed,
    pub fly_speed: Speed,
    pub swim_speed: Speed,
    pub burrow_speed: Speed,
    pub climb_speed: Speed,
    pub armor_class: ArmorClass,
    pub hit_points_value: i32,
}

#[derive(Clone)]
pub struct CreatureFacade {
    creature_service: CreatureService,
}

impl CreatureFacade {
    pub const STANDARD_CREATURE_TYPE: CreatureType = STANDARD_CREATURE_TYPE;

    pub fn new(creature_service: CreatureService) -> Self {
        Self { creature_service }
    }

    /// Build a creature with a fresh id from the request and save it
    #[instrument(skip(self, request), fields(creature_type = %request.creature_type))]
    pub fn create(&self, request: CreateCreatureRequest) -> Result<Creature, CreaturesError> {
        let mut creature = Creature::new(CreatureId::new());
        creature.armor_class = Some(request.armor_class);
        creature.hit_points = Some(HitPoints::init(request.hit_points_value));
        creature.creature_type = request.creature_type;
        creature.speeds = HashMap::from([
            (SpeedType::Walking, request.walk_speed),
            (SpeedType::Flying, request.fly_speed),
            (SpeedType::Swimming, request.swim_speed),
            (SpeedType::Burrowing, request.burrow_speed),
            (SpeedType::Climbing, request.climb_speed),
        ]);

        self.creature_service.save(&creature)?;

        info!(creature_id = %creature.id(), "Created creature");
        Ok(creature)
    }

    /// Create the default creature: AC 10, 10 HP, walking 30 ft.
    pub fn create_standard(&self) -> Result<Creature, CreaturesError> {
        self.create(CreateCreatureRequest {
            creature_type: Self::STANDARD_CREATURE_TYPE,
            walk_speed: Speed::feet(30),
            fly_speed: Speed::ZERO,
            swim_speed: Speed::ZERO,
            burrow_speed: Speed::ZERO,
            climb_speed: Speed::ZERO,
            armor_class: ArmorClass::new(10, 0),
            hit_points_value: 10,
        })
    }

    pub fn find(&self, id: CreatureId) -> Result<Creature, CreaturesError> {
        self.creature_service.find(id)
    }

    pub fn find_all(&self) -> Result<Vec<Creature>, CreaturesError> {
        self.creature_service.find_all()
    }

    pub fn delete(&self, id: CreatureId) -> Result<(), CreaturesError> {
        self.creature_service.delete(id)?;
        info!(creature_id = %id, "Deleted creature");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::services::Creatures;
    use crate::infrastructure::persistence::{InMemoryCreatureRepository, PersistedCreatures};

    /// Keeps full creatures so tests can inspect exactly what was saved
    #[derive(Default)]
    struct CapturingCreatures {
        saved: Mutex<Vec<Creature>>,
    }

    impl Creatures for CapturingCreatures {
        fn save(&self, creature: &Creature) -> Result<(), CreaturesError> {
            self.saved.lock().unwrap().push(creature.clone());
            Ok(())
        }

        fn find(&self, id: CreatureId) -> Result<Creature, CreaturesError> {
            self.saved
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id() == id)
                .cloned()
                .ok_or(CreaturesError::NotFound(id))
        }

        fn find_all(&self) -> Result<Vec<Creature>, CreaturesError> {
            Ok(self.saved.lock().unwrap().clone())
        }

        fn delete(&self, id: CreatureId) -> Result<(), CreaturesError> {
            Err(CreaturesError::NotFound(id))
        }
    }

    fn owlbear_request() -> CreateCreatureRequest {
        CreateCreatureRequest {
            creature_type: CreatureType::Monstrosity,
            walk_speed: Speed::feet(40),
            fly_speed: Speed::ZERO,
            swim_speed: Speed::feet(10),
            burrow_speed: Speed::ZERO,
            climb_speed: Speed::feet(20),
            armor_class: ArmorClass::new(12, 1),
            hit_points_value: 59,
        }
    }

    #[test]
    fn test_create_saves_one_fully_populated_creature() {
        let store = Arc::new(CapturingCreatures::default());
        let facade = CreatureFacade::new(CreatureService::new(store.clone()));

        let created = facade.create(owlbear_request()).unwrap();

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        let creature = &saved[0];
        assert_eq!(creature, &created);
        assert_eq!(creature.creature_type, CreatureType::Monstrosity);
        assert_eq!(creature.armor_class.as_ref().map(|ac| ac.total()), Some(13));
        assert_eq!(creature.hit_points, Some(HitPoints::new(59, 59, 0)));
        assert_eq!(creature.speeds.len(), 5);
        for speed_type in SpeedType::ALL {
            assert!(creature.speeds.contains_key(&speed_type));
        }
        assert_eq!(creature.speed(SpeedType::Climbing), Some(Speed::feet(20)));
        assert_eq!(creature.speed(SpeedType::Flying), Some(Speed::ZERO));
    }

    #[test]
    fn test_identical_requests_get_distinct_ids() {
        let store = Arc::new(CapturingCreatures::default());
        let facade = CreatureFacade::new(CreatureService::new(store.clone()));

        let a = facade.create(owlbear_request()).unwrap();
        let b = facade.create(owlbear_request()).unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(store.saved.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_standard_creature() {
        let store = Arc::new(CapturingCreatures::default());
        let facade = CreatureFacade::new(CreatureService::new(store));

        let creature = facade.create_standard().unwrap();
        assert_eq!(creature.creature_type, CreatureFacade::STANDARD_CREATURE_TYPE);
        assert_eq!(creature.hit_points, Some(HitPoints::init(10)));
        assert_eq!(creature.speed(SpeedType::Walking), Some(Speed::feet(30)));
        assert_eq!(facade.find(creature.id()).unwrap(), creature);
    }

    #[test]
    fn test_full_stack_round_trip_and_not_found() {
        let creatures = PersistedCreatures::new(Arc::new(InMemoryCreatureRepository::new()));
        let facade = CreatureFacade::new(CreatureService::new(Arc::new(creatures)));

        let created = facade.create(owlbear_request()).unwrap();
        assert_eq!(facade.find(created.id()).unwrap().id(), created.id());
        assert_eq!(facade.find_all().unwrap().len(), 1);

        facade.delete(created.id()).unwrap();
        let err = facade.find(created.id()).unwrap_err();
        assert_eq!(err.missing_id(), Some(created.id()));
    }
}
