use std::fmt;

use serde::{Deserialize, Serialize};

/// A trainable survivor skill. Every action tests exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    /// Searching ruins for supplies.
    Scavenging,
    /// Building, repairing and taking things apart.
    Crafting,
    /// Growing and gathering food.
    Farming,
    /// Turning scraps into meals.
    Cooking,
    /// Close-quarters fighting.
    Melee,
    /// Bows and firearms.
    Ranged,
    /// Treating the injured.
    Medical,
    /// Moving unseen.
    Stealth,
}

impl Skill {
    /// Every skill, in display order.
    pub const ALL: [Skill; 8] = [
        Self::Scavenging,
        Self::Crafting,
        Self::Farming,
        Self::Cooking,
        Self::Melee,
        Self::Ranged,
        Self::Medical,
        Self::Stealth,
    ];

    /// The skill's display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scavenging => "Scavenging",
            Self::Crafting => "Crafting",
            Self::Farming => "Farming",
            Self::Cooking => "Cooking",
            Self::Melee => "Melee",
            Self::Ranged => "Ranged",
            Self::Medical => "Medical",
            Self::Stealth => "Stealth",
        }
    }

    /// Parse a skill name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
