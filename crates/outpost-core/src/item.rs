//! Items carry per-skill bonuses that apply only while equipped.

use serde::{Deserialize, Serialize};

use crate::skill::Skill;

/// Marker prefix for equipped entries in background equipment lists.
const EQUIPPED_PREFIX: &str = "E:";

/// Stackable resources that are tracked by lower-case name.
pub const ABSTRACT_RESOURCES: [&str; 6] = ["materials", "food", "water", "medicine", "fuel", "ammo"];

/// Broad item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A weapon.
    Weapon,
    /// A tool.
    Tool,
}

/// A known item and the skill bonuses it grants when equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    /// Item name as it appears in inventories.
    pub name: &'static str,
    /// Item category.
    pub kind: ItemKind,
    /// Flat bonus per skill while equipped.
    pub bonuses: &'static [(Skill, u32)],
}

impl ItemDef {
    /// Bonus this item grants to `skill`, or 0.
    pub fn bonus(&self, skill: Skill) -> u32 {
        self.bonuses
            .iter()
            .filter(|(s, _)| *s == skill)
            .map(|(_, b)| *b)
            .sum()
    }
}

/// Items with mechanical bonuses. Anything else is flavour.
pub static ITEMS: [ItemDef; 7] = [
    ItemDef {
        name: "Hunting Bow",
        kind: ItemKind::Weapon,
        bonuses: &[(Skill::Ranged, 2)],
    },
    ItemDef {
        name: "Medical Kit",
        kind: ItemKind::Tool,
        bonuses: &[(Skill::Medical, 2)],
    },
    ItemDef {
        name: "Frying Pan",
        kind: ItemKind::Tool,
        bonuses: &[(Skill::Cooking, 1)],
    },
    ItemDef {
        name: "Crowbar",
        kind: ItemKind::Tool,
        bonuses: &[(Skill::Scavenging, 1)],
    },
    ItemDef {
        name: "Hoe",
        kind: ItemKind::Tool,
        bonuses: &[(Skill::Farming, 1)],
    },
    ItemDef {
        name: "Pistol",
        kind: ItemKind::Weapon,
        bonuses: &[(Skill::Ranged, 2)],
    },
    ItemDef {
        name: "Combat Knife",
        kind: ItemKind::Weapon,
        bonuses: &[(Skill::Melee, 2)],
    },
];

/// Look up an item definition by name, ignoring case.
pub fn find_item(name: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|i| i.name.eq_ignore_ascii_case(name))
}

/// Returns true if `name` is a stackable camp resource (any case).
pub fn is_abstract_resource(name: &str) -> bool {
    ABSTRACT_RESOURCES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(name))
}

/// One entry in a survivor's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryItem {
    /// Carried but not in use.
    Held(String),
    /// In use; contributes its bonuses.
    Equipped(String),
}

impl InventoryItem {
    /// Parse a catalog entry, where an `E:` prefix marks equipped gear.
    pub fn parse_tagged(entry: &str) -> Self {
        match entry.strip_prefix(EQUIPPED_PREFIX) {
            Some(name) => Self::Equipped(name.to_string()),
            None => Self::Held(entry.to_string()),
        }
    }

    /// The item name without any marker.
    pub fn name(&self) -> &str {
        match self {
            Self::Held(n) | Self::Equipped(n) => n,
        }
    }

    /// Returns true for equipped entries.
    pub fn is_equipped(&self) -> bool {
        matches!(self, Self::Equipped(_))
    }
}

/// Sum of equipped-item bonuses for `skill`. Unknown items contribute 0.
pub fn equipment_bonus<'a>(inventory: impl IntoIterator<Item = &'a InventoryItem>, skill: Skill) -> u32 {
    inventory
        .into_iter()
        .filter(|i| i.is_equipped())
        .filter_map(|i| find_item(i.name()))
        .map(|def| def.bonus(skill))
        .sum()
}
