//! Hit point tracking

use serde::{Deserialize, Serialize};

/// Current, maximum and temporary hit points.
///
/// Immutable: damage and healing return a new value. `current <= max` is not
/// checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
    #[serde(default)]
    pub temporary: i32,
}

impl HitPoints {
    pub fn new(current: i32, max: i32, temporary: i32) -> Self {
        Self {
            current,
            max,
            temporary,
        }
    }

    /// Fresh hit points for a new creature: full health, no temporary HP
    pub fn init(max: i32) -> Self {
        Self::new(max, max, 0)
    }

    pub fn with_temporary(self, temporary: i32) -> Self {
        Self { temporary, ..self }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Temporary hit points absorb damage first; current never drops below 0
    pub fn take_damage(self, damage: i32) -> Self {
        let damage = damage.max(0);
        let absorbed = damage.min(self.temporary.max(0));
        let remaining = damage - absorbed;
        Self {
            current: self.current.saturating_sub(remaining).max(0),
            max: self.max,
            temporary: self.temporary - absorbed,
        }
    }

    pub fn heal(self, healing: i32) -> Self {
        Self {
            current: self.current.saturating_add(healing.max(0)).min(self.max),
            ..self
        }
    }
}

impl std::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)?;
        if self.temporary > 0 {
            write!(f, " (+{} temp)", self.temporary)?;
        }
        Ok(())
    }
}
