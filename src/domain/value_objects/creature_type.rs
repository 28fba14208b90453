//! Creature classification

use serde::{Deserialize, Serialize};

/// The creature type a stat block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureType {
    Humanoid,
    Beast,
    Undead,
    Dragon,
    Giant,
    Fiend,
    Celestial,
    Elemental,
    Aberration,
    Construct,
    Ooze,
    Plant,
    Monstrosity,
    Fey,
}

impl CreatureType {
    pub const ALL: [CreatureType; 14] = [
        Self::Humanoid,
        Self::Beast,
        Self::Undead,
        Self::Dragon,
        Self::Giant,
        Self::Fiend,
        Self::Celestial,
        Self::Elemental,
        Self::Aberration,
        Self::Construct,
        Self::Ooze,
        Self::Plant,
        Self::Monstrosity,
        Self::Fey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Humanoid => "humanoid",
            Self::Beast => "beast",
            Self::Undead => "undead",
            Self::Dragon => "dragon",
            Self::Giant => "giant",
            Self::Fiend => "fiend",
            Self::Celestial => "celestial",
            Self::Elemental => "elemental",
            Self::Aberration => "aberration",
            Self::Construct => "construct",
            Self::Ooze => "ooze",
            Self::Plant => "plant",
            Self::Monstrosity => "monstrosity",
            Self::Fey => "fey",
        }
    }
}

impl std::fmt::Display for CreatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CreatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown creature type: {}", s))
    }
}
