//! Movement speeds

use serde::{Deserialize, Serialize};

/// Mode of movement a speed applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpeedType {
    Walking,
    Flying,
    Swimming,
    Climbing,
    Burrowing,
}

impl SpeedType {
    pub const ALL: [SpeedType; 5] = [
        Self::Walking,
        Self::Flying,
        Self::Swimming,
        Self::Climbing,
        Self::Burrowing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "WALKING",
            Self::Flying => "FLYING",
            Self::Swimming => "SWIMMING",
            Self::Climbing => "CLIMBING",
            Self::Burrowing => "BURROWING",
        }
    }
}

impl std::fmt::Display for SpeedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movement rate, measured in feet per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Speed(u32);

impl Speed {
    pub const ZERO: Speed = Speed(0);

    pub fn feet(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ft.", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_display() {
        assert_eq!(Speed::feet(30).to_string(), "30 ft.");
        assert!(Speed::ZERO.is_zero());
    }
}
