//! Helpers for presenting, rating and assembling creatures

use crate::domain::entities::Creature;
use crate::domain::value_objects::{
    ArmorClass, CreatureId, CreatureType, HitPoints, Speed, SpeedType,
};

/// Multi-line summary of a creature's stat block
pub fn format_creature_info(creature: &Creature) -> String {
    let mut lines = vec![
        format!("ID: {}", creature.id()),
        format!("Type: {}", creature.creature_type),
    ];

    if let Some(ac) = &creature.armor_class {
        lines.push(format!("Armor Class: {}", ac));
    }
    if let Some(hp) = creature.hit_points {
        lines.push(format!("Hit Points: {}", hp));
    }

    let speeds: Vec<String> = SpeedType::ALL
        .iter()
        .filter_map(|kind| {
            let speed = creature.speed(*kind)?;
            Some(format!("{}: {}", kind, speed))
        })
        .collect();
    if !speeds.is_empty() {
        lines.push(format!("Speeds: {}", speeds.join(", ")));
    }

    lines.join("\n")
}

/// Rough challenge rating estimate from armor, hit points and type
pub fn challenge_rating(creature: &Creature) -> f64 {
    let mut rating = 0.5;

    if let Some(ac) = &creature.armor_class {
        rating += ac.total() as f64 * 0.1;
    }
    if let Some(hp) = creature.hit_points {
        rating += f64::from(hp.max) * 0.05;
    }

    rating += match creature.creature_type {
        CreatureType::Dragon => 5.0,
        CreatureType::Fiend => 3.0,
        CreatureType::Undead => 2.0,
        CreatureType::Beast => 1.0,
        _ => 0.0,
    };

    rating
}

/// Same identity and same type
pub fn same_creature(a: &Creature, b: &Creature) -> bool {
    a.id() == b.id() && a.creature_type == b.creature_type
}

/// Fluent construction of a creature with a fresh id
#[derive(Debug, Clone)]
pub struct CreatureBuilder {
    creature: Creature,
}

impl CreatureBuilder {
    pub fn new() -> Self {
        Self {
            creature: Creature::new(CreatureId::new()),
        }
    }

    pub fn with_type(mut self, creature_type: CreatureType) -> Self {
        self.creature.creature_type = creature_type;
        self
    }

    pub fn with_armor_class(mut self, armor_class: ArmorClass) -> Self {
        self.creature.armor_class = Some(armor_class);
        self
    }

    pub fn with_hit_points(mut self, max: i32) -> Self {
        self.creature.hit_points = Some(HitPoints::init(max));
        self
    }

    pub fn with_speed(mut self, speed_type: SpeedType, speed: Speed) -> Self {
        self.creature.set_speed(speed_type, speed);
        self
    }

    pub fn build(self) -> Creature {
        self.creature
    }
}

impl Default for CreatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
