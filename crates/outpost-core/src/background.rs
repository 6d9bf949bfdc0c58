use crate::item::InventoryItem;
use crate::skill::Skill;

/// A survivor's life before the fall: starting skill bonuses and gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    /// Display name (also the lookup key).
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Skill points granted at creation.
    pub skills: &'static [(Skill, u32)],
    /// Starting gear. An `E:` prefix marks the item as equipped.
    pub equipment: &'static [&'static str],
}

impl Background {
    /// The starting inventory, with equipped markers resolved.
    pub fn starting_inventory(&self) -> Vec<InventoryItem> {
        self.equipment
            .iter()
            .map(|e| InventoryItem::parse_tagged(e))
            .collect()
    }
}

/// All backgrounds available at survivor creation.
pub static BACKGROUNDS: [Background; 7] = [
    Background {
        name: "Mechanic",
        description: "A skilled tinkerer who can fix almost anything.",
        skills: &[(Skill::Crafting, 2), (Skill::Scavenging, 2)],
        equipment: &["E:Wrench", "Duct Tape", "Screwdriver"],
    },
    Background {
        name: "Hunter",
        description: "Experienced in the wild. Knows how to hunt and stay hidden.",
        skills: &[(Skill::Ranged, 2), (Skill::Stealth, 1), (Skill::Scavenging, 1)],
        equipment: &["E:Hunting Bow", "Arrows x10", "Camo Jacket"],
    },
    Background {
        name: "Medic",
        description: "Trained in medical aid, vital for survival.",
        skills: &[(Skill::Medical, 3), (Skill::Melee, 1)],
        equipment: &["E:Medical Kit", "Bandage x2", "Painkillers"],
    },
    Background {
        name: "Cook",
        description: "Knows how to turn scraps into a morale-boosting meal.",
        skills: &[(Skill::Cooking, 3), (Skill::Farming, 1)],
        equipment: &["E:Frying Pan", "Cooking Oil", "Can of Beans"],
    },
    Background {
        name: "Scavenger",
        description: "Fast, quiet, and efficient when looting.",
        skills: &[(Skill::Scavenging, 2), (Skill::Stealth, 2)],
        equipment: &["E:Crowbar", "Flashlight", "Rucksack"],
    },
    Background {
        name: "Farmer",
        description: "Knows how to keep food growing and soil healthy.",
        skills: &[(Skill::Farming, 3), (Skill::Ranged, 1)],
        equipment: &["E:Hoe", "Seed Packet", "Work Gloves"],
    },
    Background {
        name: "Soldier",
        description: "Trained in combat. Keeps zombies off your back.",
        skills: &[(Skill::Melee, 1), (Skill::Ranged, 2), (Skill::Medical, 1)],
        equipment: &["E:Pistol", "Ammo x10", "Combat Knife", "Bandage"],
    },
];

/// Look up a background by name, ignoring case.
pub fn find_background(name: &str) -> Option<&'static Background> {
    BACKGROUNDS
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
}
