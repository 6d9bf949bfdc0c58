use serde::Serialize;

use crate::skill::Skill;

/// A camp action a survivor (or a group) can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionDef {
    /// Lookup key used by commands (e.g. `scavenge`).
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// The skill whose points fund the roll.
    pub skill: Skill,
    /// One-line flavour description.
    pub description: &'static str,
}

/// Every action, in catalog order.
pub static ACTIONS: [ActionDef; 11] = [
    ActionDef {
        key: "scavenge",
        name: "Scavenge",
        skill: Skill::Scavenging,
        description: "Search nearby ruins for useful supplies.",
    },
    ActionDef {
        key: "heal",
        name: "Heal",
        skill: Skill::Medical,
        description: "Treat injured survivors using available supplies.",
    },
    ActionDef {
        key: "cook",
        name: "Cook",
        skill: Skill::Cooking,
        description: "Prepare food to improve camp morale and prevent sickness.",
    },
    ActionDef {
        key: "farm",
        name: "Farm",
        skill: Skill::Farming,
        description: "Tend to the crops or plant new ones for sustainable food.",
    },
    ActionDef {
        key: "repair",
        name: "Repair",
        skill: Skill::Crafting,
        description: "Fix broken tools, weapons, or camp facilities.",
    },
    ActionDef {
        key: "dismantle",
        name: "Dismantle",
        skill: Skill::Crafting,
        description: "Dismantle items to salvage materials.",
    },
    ActionDef {
        key: "craft",
        name: "Craft",
        skill: Skill::Crafting,
        description: "Use materials to create new tools, gear, or items.",
    },
    ActionDef {
        key: "guard",
        name: "Guard Duty",
        skill: Skill::Melee,
        description: "Clear out threats near the base camp.",
    },
    ActionDef {
        key: "hunt",
        name: "Hunt",
        skill: Skill::Ranged,
        description: "Track wild animals to provide meat and materials.",
    },
    ActionDef {
        key: "sneak_scout",
        name: "Scout (Stealth)",
        skill: Skill::Stealth,
        description: "Scout nearby areas quietly to map out threats or resources.",
    },
    ActionDef {
        key: "forage",
        name: "Forage",
        skill: Skill::Farming,
        description: "Gather edible plants and herbs from the wild.",
    },
];

/// Look up an action by key. Keys are exact.
pub fn find_action(key: &str) -> Option<&'static ActionDef> {
    ACTIONS.iter().find(|a| a.key == key)
}
