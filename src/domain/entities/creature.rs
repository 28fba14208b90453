//! Creature entity - A monster or NPC stat block with identity

use std::collections::HashMap;

use crate::domain::value_objects::{
    ArmorClass, CreatureId, CreatureType, HitPoints, Speed, SpeedType,
};

/// Type given to creatures that are built without naming one
pub const STANDARD_CREATURE_TYPE: CreatureType = CreatureType::Monstrosity;

/// Capability of taking part in combat
pub trait Fightable {
    fn armor_class(&self) -> Option<&ArmorClass>;

    fn hit_points(&self) -> Option<HitPoints>;

    fn take_damage(&mut self, damage: i32);

    /// A creature without hit points has never been statted and cannot fight
    fn is_alive(&self) -> bool {
        self.hit_points().is_some_and(|hp| hp.is_alive())
    }
}

/// A creature in the bestiary.
///
/// The id is fixed at construction; every other attribute is a plain field
/// with no cross-checking between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    id: CreatureId,
    pub creature_type: CreatureType,
    pub armor_class: Option<ArmorClass>,
    pub hit_points: Option<HitPoints>,
    pub speeds: HashMap<SpeedType, Speed>,
}

impl Creature {
    pub fn new(id: CreatureId) -> Self {
        Self::with_type(id, STANDARD_CREATURE_TYPE)
    }

    pub fn with_type(id: CreatureId, creature_type: CreatureType) -> Self {
        Self {
            id,
            creature_type,
            armor_class: None,
            hit_points: None,
            speeds: HashMap::new(),
        }
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn speed(&self, speed_type: SpeedType) -> Option<Speed> {
        self.speeds.get(&speed_type).copied()
    }

    pub fn set_speed(&mut self, speed_type: SpeedType, speed: Speed) {
        self.speeds.insert(speed_type, speed);
    }
}

impl Fightable for Creature {
    fn armor_class(&self) -> Option<&ArmorClass> {
        self.armor_class.as_ref()
    }

    fn hit_points(&self) -> Option<HitPoints> {
        self.hit_points
    }

    fn take_damage(&mut self, damage: i32) {
        if let Some(hp) = self.hit_points {
            self.hit_points = Some(hp.take_damage(damage));
        }
    }
}
