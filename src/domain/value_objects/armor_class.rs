//! Armor class value object

use serde::{Deserialize, Serialize};

/// Description used when a stat block does not name its armor
pub const STANDARD_ARMOR_CLASS_DESCRIPTION: &str = "natural armor";

/// Armor class split into its base value and bonus.
///
/// The total is always derived from `base + bonus`; it is never stored, so
/// changing either part changes the total. It is widened to `i64` so any pair
/// of parts sums exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClass {
    base: i32,
    bonus: i32,
    description: String,
}

impl ArmorClass {
    pub fn new(base: i32, bonus: i32) -> Self {
        Self::with_description(base, bonus, STANDARD_ARMOR_CLASS_DESCRIPTION)
    }

    pub fn with_description(base: i32, bonus: i32, description: impl Into<String>) -> Self {
        Self {
            base,
            bonus,
            description: description.into(),
        }
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn set_base(&mut self, base: i32) {
        self.base = base;
    }

    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    pub fn set_bonus(&mut self, bonus: i32) {
        self.bonus = bonus;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn total(&self) -> i64 {
        i64::from(self.base) + i64::from(self.bonus)
    }
}

impl std::fmt::Display for ArmorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AC {} ({})", self.total(), self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_base_plus_bonus() {
        assert_eq!(ArmorClass::new(12, 2).total(), 14);
    }

    #[test]
    fn test_total_follows_mutation() {
        let mut ac = ArmorClass::new(12, 2);
        ac.set_bonus(-1);
        assert_eq!(ac.total(), 11);
        ac.set_base(18);
        assert_eq!(ac.total(), 17);
    }

    #[test]
    fn test_total_of_extreme_parts_is_exact() {
        assert_eq!(ArmorClass::new(i32::MAX, 1).total(), i64::from(i32::MAX) + 1);
        assert_eq!(ArmorClass::new(i32::MIN, -1).total(), i64::from(i32::MIN) - 1);
        assert_eq!(ArmorClass::new(i32::MAX, 1).to_string(), "AC 2147483648 (natural armor)");
    }

    #[test]
    fn test_display_includes_description() {
        let ac = ArmorClass::with_description(16, 2, "plate, shield");
        assert_eq!(ac.to_string(), "AC 18 (plate, shield)");
        assert_eq!(ArmorClass::new(10, 0).description(), STANDARD_ARMOR_CLASS_DESCRIPTION);
    }
}
